pub mod bar_chart;
pub mod check_list;
pub mod date_input;
pub mod error_bar;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod store_select;
pub mod table;

pub use bar_chart::BarChart;
pub use check_list::CheckList;
pub use date_input::DateInput;
pub use error_bar::{ErrorBar, MessageRow, NoticeBar};
pub use filter_panel::FilterPanel;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::{CardTone, StatCard};
pub use store_select::{store_options, StoreMultiSelect, StoreSelect};
