pub mod request;
pub mod response;

pub use request::{MutationRequest, MutationTemplate};
pub use response::{MutationError, MutationResult, MutationUserError};

use crate::usecases::common::UseCaseMetadata;

pub struct ProductMutation;

impl UseCaseMetadata for ProductMutation {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "product_mutation"
    }

    fn display_name() -> &'static str {
        "Product mutations"
    }

    fn description() -> &'static str {
        "Run GraphQL mutations against the commerce platform through the backend proxy"
    }
}
