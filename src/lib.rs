pub mod app;
pub mod catalog;
pub mod embed;
pub mod loader;
pub mod logging;
pub mod thumbs;
pub mod ui;
