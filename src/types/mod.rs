//! Shared type definitions
//!
//! This module contains the data types shared across the application.

pub mod config;
pub mod message;

pub use config::AppConfig;
pub use message::{Message, Role};
