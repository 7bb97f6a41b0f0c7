//! # ventas-core
//!
//! Core types, configuration, and error handling shared by the ventas crates.

pub mod config;
pub mod error;
pub mod message;
