//! Pipe-delimited file reading.

mod header;
mod reader;

pub use reader::{DELIMITER, DelimitedTable, SourceRow, read_delimited};
