mod combat_event;
mod error;
mod parser;
mod reader;
mod schema;

#[cfg(test)]
pub(crate) mod test_lines;

pub use combat_event::*;
pub use error::{ParseError, ReaderError};
pub use parser::LogParser;
pub use reader::{ReadSummary, Reader};
pub use schema::{DamageColumns, LogSchema, SupportColumns};
