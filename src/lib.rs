pub mod config;
pub mod console;
pub mod models;
pub mod seed;
pub mod services;
pub mod utils;
