pub mod builder;
pub mod category;
pub mod csv;
pub mod highlight;
pub mod render;
pub mod search;
pub mod store;

pub use builder::build;
pub use category::{collect_categories, filter_by_category};
pub use csv::{CsvParser, parse};
pub use highlight::highlight;
pub use render::render;
pub use search::{SearchTier, classify, search};
pub use store::GlossaryStore;
