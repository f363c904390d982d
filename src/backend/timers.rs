//! Keyed, abortable one-shot timers on the Tokio runtime.

use std::collections::HashMap;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::message::MessageId;

/// Which deferred action a timer belongs to. At most one timer per key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Reply,
    Rewrite(MessageId),
}

/// Pending timers, each a spawned task that sleeps and then fires once.
///
/// Must be used from inside a Tokio runtime.
#[derive(Default)]
pub struct TimerSet {
    tasks: HashMap<TimerKey, JoinHandle<()>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `delay`. An older timer with the same key is aborted.
    pub fn schedule<F>(&mut self, key: TimerKey, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });
        if let Some(previous) = self.tasks.insert(key, handle) {
            previous.abort();
            tracing::trace!(?key, "superseded pending timer");
        }
    }

    /// Abort the timer for `key`. Returns false if nothing was pending.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        match self.tasks.remove(&key) {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Forget timers that already fired.
    pub fn reap(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }

    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[tokio::test]
    async fn test_timer_fires_once() {
        let fired = counter();
        let mut timers = TimerSet::new();
        let f = Arc::clone(&fired);
        timers.schedule(TimerKey::Reply, Duration::from_millis(20), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(timers.pending(), 1);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        timers.reap();
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancel_prevents_firing() {
        let fired = counter();
        let mut timers = TimerSet::new();
        let f = Arc::clone(&fired);
        timers.schedule(TimerKey::Reply, Duration::from_millis(50), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });

        assert!(timers.cancel(TimerKey::Reply));
        assert!(!timers.cancel(TimerKey::Reply));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_same_key_supersedes() {
        let fired = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut timers = TimerSet::new();
        let key = TimerKey::Rewrite(MessageId(1));

        let f = Arc::clone(&fired);
        timers.schedule(key, Duration::from_millis(50), move || f.lock().unwrap().push("first"));
        let f = Arc::clone(&fired);
        timers.schedule(key, Duration::from_millis(50), move || f.lock().unwrap().push("second"));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["second"]);
    }

    #[tokio::test]
    async fn test_distinct_keys_run_independently() {
        let fired = counter();
        let mut timers = TimerSet::new();
        for key in [
            TimerKey::Reply,
            TimerKey::Rewrite(MessageId(1)),
            TimerKey::Rewrite(MessageId(2)),
        ] {
            let f = Arc::clone(&fired);
            timers.schedule(key, Duration::from_millis(10), move || {
                f.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 3);
    }
}
