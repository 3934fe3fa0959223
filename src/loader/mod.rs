//! Loader module turning raw tabular input into canonical invoice records

pub mod load;
pub mod table;

pub use load::*;
pub use table::*;
