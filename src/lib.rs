pub mod api;
pub mod app;
pub mod filter;
pub mod forms;
pub mod pages;
pub mod utils;
pub mod validate;
