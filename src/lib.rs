pub mod cli;
pub mod config;
pub mod feed;
pub mod fetch;
pub mod headless;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod ui;
