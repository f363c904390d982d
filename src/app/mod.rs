//! Application module structure for PreviewApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: PreviewApp struct, initialization and user operations
//! - `events`: Event processing from the scheduler
//! - `update`: Main update loop and global shortcuts
//! - `ui::panels`: Header and central message panel rendering
//! - `ui::input`: Prompt input bar

pub mod core;
pub mod events;
pub mod ui;
pub mod update;

// Re-export PreviewApp for public API
pub use core::PreviewApp;
