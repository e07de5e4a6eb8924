pub mod dto;
pub mod request;
pub mod response;

pub use dto::VariantRow;
pub use request::{BulkUpdateRequest, VariantUpdate};
pub use response::{BulkUpdateFailure, BulkUpdateResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct BulkVariantUpdate;

impl UseCaseMetadata for BulkVariantUpdate {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "bulk_update"
    }

    fn display_name() -> &'static str {
        "Bulk update"
    }

    fn description() -> &'static str {
        "Edit price, compare-at price and SKU of many variants at once"
    }
}
