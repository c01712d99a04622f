//! Duck Attire Customizer Library
//!
//! This library provides the garment catalog, the selection state machine,
//! and the render pipeline behind the terminal UI, the command-line
//! subcommands, and the optional web front end.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
