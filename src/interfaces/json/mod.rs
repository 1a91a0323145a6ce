pub mod config;
pub mod quote_writer;
