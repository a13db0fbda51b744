pub mod api;
pub mod cli;
pub mod errors;
pub mod file_processing;
pub mod interpreter;
pub mod models;
pub mod session;
pub mod utils;
