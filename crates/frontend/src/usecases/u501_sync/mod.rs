pub mod api;
pub mod view;

pub use view::SyncControl;
