//! UI components for Gopher Archive
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod components;
