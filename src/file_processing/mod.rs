pub mod paths;
pub mod reader;
pub mod writer;
