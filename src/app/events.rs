//! Event processing from backend

use super::PreviewApp;
use crate::events;

impl PreviewApp {
    /// Pull finished timers from the scheduler. Returns true if anything changed.
    pub fn process_events(&mut self) -> bool {
        events::process_events(&self.event_rx, &mut self.state)
    }
}
