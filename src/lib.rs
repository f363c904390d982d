//! Tone Preview library.
//!
//! A chat preview where canned AI replies can be rewritten in a different
//! tone. This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod input_state;
pub mod logging;
pub mod message;
pub mod protocol;
pub mod state;
pub mod tone;
pub mod ui;
pub mod validation;
