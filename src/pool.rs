//! Bounded worker pool with join-to-quiescence semantics (§4.3).
//!
//! A fixed number of OS threads drain a FIFO task queue. `execute` never
//! blocks on pool capacity — the backlog is unbounded — and `finish` blocks
//! the caller until every previously submitted task has actually finished
//! running, not merely until the queue looks empty. The two are different:
//! a task can be popped off the queue and sitting in a worker's hand,
//! neither queued nor complete. `outstanding` tracks exactly that window,
//! and both `execute`'s increment and the worker's decrement happen under
//! the same lock that guards `finish`'s wakeup condition.

use parking_lot::{Condvar, Mutex};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

type Task = Box<dyn FnOnce() + Send + 'static>;

struct State {
    queue: std::collections::VecDeque<Task>,
    outstanding: usize,
    shutdown: bool,
}

struct Shared {
    state: Mutex<State>,
    not_empty: Condvar,
    quiescent: Condvar,
}

/// A pool of worker threads executing arbitrary `FnOnce` tasks.
pub struct WorkQueue {
    shared: Arc<Shared>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkQueue {
    /// Spawn `num_workers` threads (clamped to at least 1).
    pub fn new(num_workers: usize) -> Self {
        let num_workers = num_workers.max(1);
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                queue: std::collections::VecDeque::new(),
                outstanding: 0,
                shutdown: false,
            }),
            not_empty: Condvar::new(),
            quiescent: Condvar::new(),
        });

        let handles = (0..num_workers)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(&shared))
            })
            .collect();

        Self {
            shared,
            handles: Mutex::new(handles),
        }
    }

    /// Enqueue `task`. Never blocks, never rejects unless already shut down.
    pub fn execute<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.shared.state.lock();
        debug_assert!(!state.shutdown, "execute called after shutdown");
        state.queue.push_back(Box::new(task));
        state.outstanding += 1;
        drop(state);
        self.shared.not_empty.notify_one();
    }

    /// Block until the queue is empty and no task is in flight. `execute`
    /// may be called again afterwards — this does not shut the pool down.
    pub fn finish(&self) {
        let mut state = self.shared.state.lock();
        while state.outstanding != 0 {
            self.shared.quiescent.wait(&mut state);
        }
    }

    /// Signal workers to exit once the queue drains. `execute` must not be
    /// called afterwards.
    pub fn shutdown(&self) {
        let mut state = self.shared.state.lock();
        state.shutdown = true;
        drop(state);
        self.shared.not_empty.notify_all();
    }

    /// Wait for every worker thread to terminate. Call after `shutdown`.
    pub fn join(&self) {
        let mut handles = self.handles.lock();
        for handle in handles.drain(..) {
            let _ = handle.join();
        }
    }

    /// Convenience: shut down and wait for full termination.
    pub fn shutdown_and_join(&self) {
        self.shutdown();
        self.join();
    }
}

fn worker_loop(shared: &Arc<Shared>) {
    loop {
        let task = {
            let mut state = shared.state.lock();
            loop {
                if let Some(task) = state.queue.pop_front() {
                    break Some(task);
                }
                if state.shutdown {
                    break None;
                }
                shared.not_empty.wait(&mut state);
            }
        };

        let Some(task) = task else { return };

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
            eprintln!("[worker] task panicked: {}", panic_message(&payload));
        }

        let mut state = shared.state.lock();
        state.outstanding -= 1;
        if state.outstanding == 0 {
            shared.quiescent.notify_all();
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
