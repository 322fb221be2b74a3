//! Gopher Archive Library
//!
//! Core library for the Gopher Archive learning assistant: the chat
//! session, archive client, transcript export and the Dioxus desktop UI.

pub mod app;
pub mod archive;
pub mod capabilities;
pub mod conversation;
pub mod export;
pub mod session;
pub mod storage;
pub mod types;
pub mod ui;
