//! Ownership of the repeating tick registration

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to the active tick task registration
///
/// At most one handle is live per timer instance; the owning component
/// cancels it before registering a replacement.
#[derive(Debug)]
pub struct ScheduleHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl ScheduleHandle {
    /// Wrap a spawned tick task under the given generation
    pub fn new(generation: u64, task: JoinHandle<()>) -> Self {
        Self { generation, task }
    }

    /// Get the generation this schedule was registered under
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancel the schedule, preventing any further tick from firing
    pub fn cancel(self) {
        debug!("Cancelling schedule (generation {})", self.generation);
        self.task.abort();
    }
}
