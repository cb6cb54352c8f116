//! Jotter: a single-user todo service backed by a JSON file.

pub mod config;
pub mod error;
pub mod todos;
