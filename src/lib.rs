pub mod config;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod selector;
pub mod writer;
