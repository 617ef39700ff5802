//! Utility modules for the BWLP backend.
//!
//! Configuration loading and application data paths.

/// Application configuration.
pub mod config;
/// Path utilities for the application data directory.
pub mod paths;
