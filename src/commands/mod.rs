//! CLI commands for graphic

pub mod algorithm;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod render;
pub mod session;
pub mod show;
