//! halbot-dispatch
//!
//! Turns chat lines into replies: an ordered list of pattern bindings
//! (`dispatcher`), the search command grammar (`command`), the reply
//! digest (`format`) and the stock handlers (`handlers`).
pub mod command;
pub mod dispatcher;
pub mod format;
pub mod handlers;

pub use command::{RequestedCount, SearchCommand};
pub use dispatcher::{CommandMatch, Dispatcher, DispatcherBuilder, Handler};
pub use format::{format_summary, render_summary};
pub use handlers::standard_dispatcher;
