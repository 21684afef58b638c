pub mod jlpt;
pub mod loader;

pub use jlpt::JlptLevel;
pub use loader::CatalogLoader;
