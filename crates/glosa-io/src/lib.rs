pub mod file;
pub mod http;
pub mod source;
pub mod stdin;

pub use file::FileSource;
pub use http::HttpSource;
pub use source::{GlossarySource, SourceError, source_from_config};
