//! Scrivo - a small plain-text editor
//!
//! The editing logic lives in [`scrivo_core`]; this crate provides the Floem
//! window around it.

// Re-export the core
pub use scrivo_core;

// Feature-gated modules
#[cfg(feature = "gui")]
pub mod gui;
