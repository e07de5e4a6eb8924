//! URL-synchronised list views: pagination, sorting and filtering state
//! that survives a page reload because it lives in the query string.
//!
//! Every list page declares a static [`ListSpec`] and keeps a single
//! `RwSignal<ViewState>` created by [`url_sync::create_url_state`]. Event
//! handlers only call the reducers on [`ViewState`]; fetching and rendering
//! read from the signal.

pub mod controls;
pub mod page_info;
pub mod query;
pub mod spec;
pub mod state;
pub mod url_sync;

pub use controls::ListControls;
pub use page_info::{PageInfo, PageMove};
pub use query::QueryParams;
pub use spec::{FilterKind, FilterSpec, ListSpec};
pub use state::{FilterValue, ViewState};
pub use url_sync::{create_url_state, read_location_query, replace_location_query};
