pub mod api;
pub mod model;
pub mod view;

pub use view::ProductMutationConsole;
