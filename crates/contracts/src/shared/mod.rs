pub mod api_message;
pub mod sort;

pub use api_message::ApiMessage;
pub use sort::SortOrder;
