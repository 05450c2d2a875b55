//! `speedread` - terminal speed reader.
//!
//! Shows an article one word at a time with each word's optimal recognition
//! point (ORP) highlighted and held on a fixed column, either as plain
//! terminal output or in a full-screen reader window.

// Re-export public modules for use in integration tests and as a library
pub mod article;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod orp;
pub mod render;
pub mod style;
pub mod types;
pub mod ui;

pub use orp::{format_for_speed_reading, EmptyWordError, RenderDescriptor};
