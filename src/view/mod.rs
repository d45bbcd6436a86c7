//! The client list view.
//!
//! - [`columns`] - column set and the alphabetic comparator
//! - [`filter`] - table rows and the search filter
//! - [`state`] - view state and pagination
//! - [`render`] - pure page description
//! - [`list`] - [`RecordListView`] and its handlers

pub mod columns;
pub mod filter;
pub mod list;
pub mod render;
pub mod state;

pub use columns::{ColumnKey, SortDirection, SortOrder};
pub use filter::TableRow;
pub use list::{client_path, CreateOutcome, RecordListView, ViewError};
pub use render::{render, ButtonIcon, ListPage};
pub use state::{Pagination, ViewState};
