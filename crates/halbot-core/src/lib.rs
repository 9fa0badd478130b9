#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod registry;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use registry::IndexRegistry;
pub use traits::SearchBackend;
pub use types::{Document, SearchResult};
