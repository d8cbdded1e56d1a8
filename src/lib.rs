//! Desktop widgets - frameless panels you can grab and fling
//!
//! This crate provides the inertial positioning engine (`motion`) and the
//! Elm-style application state around it. The winit host lives in the
//! binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod motion;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetsConfig;
pub use messages::Msg;
pub use model::AppModel;
