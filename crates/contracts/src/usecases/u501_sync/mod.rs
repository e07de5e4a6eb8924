pub mod progress;
pub mod request;

pub use progress::{SyncStatusResponse, SyncTask, SyncTaskStatus};
pub use request::{SyncKind, SyncStartRequest, SyncStartResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct StoreSync;

impl UseCaseMetadata for StoreSync {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "sync"
    }

    fn display_name() -> &'static str {
        "Sync control"
    }

    fn description() -> &'static str {
        "Pull orders, products and inventory from the commerce platform"
    }
}
