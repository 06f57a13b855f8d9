pub mod command_interpreter;
pub mod config;
pub mod data;
pub mod error;
pub mod query_parser;
pub mod utils;

pub use data::cell_type::SemanticCellType;
pub use data::csv_loader::CsvLoader;
pub use data::datatable::{Row, Table, TableBuilder};
pub use data::query_dispatcher::QueryDispatcher;
pub use error::{QueryError, TableError};
