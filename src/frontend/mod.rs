//! Frontend module for the BWLP application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
