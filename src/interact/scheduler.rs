//! Keyed, cancellable delayed tasks.
//!
//! Every delayed page effect is registered under a key naming the element it
//! animates. Scheduling again under the same key aborts the pending task, so
//! the latest trigger wins instead of racing the earlier one.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{Error, Result};

pub struct TransitionScheduler {
    handle: Handle,
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl TransitionScheduler {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Build a scheduler on the runtime the caller is running in.
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| Error::Other(format!("timed page effects need a tokio runtime: {}", e)))?;
        Ok(Self::new(handle))
    }

    /// Run `action` after `delay`, replacing any pending task under `key`.
    pub fn schedule<F>(&self, key: impl Into<String>, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let key = key.into();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });

        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = tasks.insert(key.clone(), task) {
            if !previous.is_finished() {
                previous.abort();
                log::debug!("superseded pending transition `{}`", key);
            }
        }
    }

    /// Abort the pending task under `key`. Returns whether one was pending.
    pub fn cancel(&self, key: &str) -> bool {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        match tasks.remove(key) {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }

    /// Number of tasks that have not run yet
    pub fn pending(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|_, t| !t.is_finished());
        tasks.len()
    }
}

impl Drop for TransitionScheduler {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(|e| e.into_inner());
        for (_, task) in tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let s = TransitionScheduler::current().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        s.schedule("a", Duration::from_millis(100), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(s.pending(), 1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(s.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn same_key_supersedes() {
        let s = TransitionScheduler::current().unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));
        for (label, delay) in [("first", 300), ("second", 150)] {
            let log = log.clone();
            s.schedule("card:0", Duration::from_millis(delay), move || {
                log.lock().unwrap().push(label);
            });
        }
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*log.lock().unwrap(), vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_task() {
        let s = TransitionScheduler::current().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        s.schedule("x", Duration::from_millis(10), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert!(s.cancel("x"));
        assert!(!s.cancel("x"));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn current_without_runtime_fails() {
        assert!(TransitionScheduler::current().is_err());
    }
}
