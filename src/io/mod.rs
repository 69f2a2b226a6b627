pub mod output;
pub mod reader;
