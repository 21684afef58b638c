pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod preprocess;
pub mod readings;
pub mod session;
pub mod view_state;

pub use aggregate::{CategoryCount, aggregate, summarize};
pub use catalog::{ALL_CATEGORY, Catalog, CatalogError, CategoryDescriptor, KanjiRecord, RecordId};
pub use filter::{filter, filter_ids};
pub use session::{BrowseSession, Transition};
pub use view_state::ViewState;
