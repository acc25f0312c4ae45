//! UI Components
//!
//! View pieces of the fact board. Each reads the shared `AppState` from
//! context and renders a snapshot of the board.

mod category_filter;
mod fact_item;
mod fact_list;
mod header;
mod loader;
mod new_fact_form;

pub use category_filter::CategoryFilter;
pub use fact_item::FactItem;
pub use fact_list::FactList;
pub use header::Header;
pub use loader::Loader;
pub use new_fact_form::NewFactForm;
