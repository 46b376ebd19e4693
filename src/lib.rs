pub mod app;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod loader;
pub mod models;
pub mod page;
pub mod render;
pub mod sanitize;
pub mod server;
pub mod store;
