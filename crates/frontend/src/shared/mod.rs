pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod endpoints;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod page_frame;
pub mod page_standard;
pub mod poller;
pub mod sequence;
