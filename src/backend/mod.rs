/// Backend submodules for the simulated response scheduler
///
/// - `main_loop`: action channel loop on a Tokio runtime
/// - `timers`: keyed, abortable one-shot timers
mod main_loop;
pub mod timers;

// Re-export the main backend entry point
pub use main_loop::run_backend;
