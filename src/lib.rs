pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod parser;
pub mod session;
pub mod storage;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
