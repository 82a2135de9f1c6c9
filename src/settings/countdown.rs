//! Popup countdown ticks.
//!
//! A scheduler starts one periodic tick source per popup and hands back the
//! only way to stop it, a [`CountdownHandle`]. Each source is tagged with a
//! generation so the controller can drop ticks that were already queued when
//! the handle was cancelled.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owner of one running countdown. Cancelling or dropping it stops the ticks.
#[derive(Debug)]
pub struct CountdownHandle {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    /// Handle with no task behind it, for schedulers that deliver ticks
    /// some other way.
    pub fn detached(generation: u64) -> Self {
        Self {
            generation,
            task: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

pub trait CountdownScheduler {
    /// Start ticking once per period, tagged with `generation`.
    fn start(&mut self, generation: u64) -> CountdownHandle;
}

/// Receives `(generation)` on every tick. Returning `false` ends the task.
pub type TickSink = Arc<dyn Fn(u64) -> bool + Send + Sync>;

/// Runs each countdown as a task on a tokio runtime.
pub struct TokioScheduler {
    runtime: Handle,
    period: Duration,
    sink: TickSink,
}

impl TokioScheduler {
    pub fn new(runtime: Handle, period: Duration, sink: TickSink) -> Self {
        Self {
            runtime,
            period,
            sink,
        }
    }
}

impl CountdownScheduler for TokioScheduler {
    fn start(&mut self, generation: u64) -> CountdownHandle {
        let period = self.period;
        let sink = Arc::clone(&self.sink);
        let task = self.runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !sink(generation) {
                    tracing::trace!(generation, "Countdown receiver gone");
                    break;
                }
            }
        });
        CountdownHandle {
            generation,
            task: Some(task),
        }
    }
}
