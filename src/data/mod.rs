//! Data layer: type inference, table construction and query dispatch
//!
//! Raw lines flow through `row_parser` into `datatable::TableBuilder`, which
//! unifies the per-row types from `type_inference` using the lattice in
//! `cell_type`. Queries against the finished `Table` go through
//! `query_dispatcher`.

// Core data modules
pub mod cell_type;
pub mod cell_value;
pub mod datatable;
pub mod row_parser;
pub mod type_inference;

// Data source modules
pub mod csv_loader;

// Query execution
pub mod query_dispatcher;
