//! Shared utilities for the Scrivo GUI

pub mod dialogs;
