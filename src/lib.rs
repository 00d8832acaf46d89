pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod knowledge;
pub mod llm;
pub mod models;
pub mod registry;
pub mod samples;
pub mod utils;
