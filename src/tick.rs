//! Tick Queue - Continuations that run after the reactive batch settles
//!
//! spark-signals runs effects synchronously, but some work must wait until
//! every effect triggered by the current batch of writes has run. Those
//! continuations are queued with [`next_tick`] and executed by [`flush`].
//!
//! # Example
//!
//! ```ignore
//! use spark_model_toggle::tick;
//!
//! tick::next_tick(|| println!("after the batch"));
//! model_value.set(Some(true)); // watchers react
//! tick::flush();               // effects settle, then the continuation runs
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;

use spark_signals::flush_sync;

thread_local! {
    static TICK_QUEUE: RefCell<VecDeque<Box<dyn FnOnce()>>> = RefCell::new(VecDeque::new());
}

/// Queue a continuation for the next [`flush`].
pub fn next_tick(f: impl FnOnce() + 'static) {
    TICK_QUEUE.with(|queue| queue.borrow_mut().push_back(Box::new(f)));
}

/// Number of queued continuations.
pub fn pending_ticks() -> usize {
    TICK_QUEUE.with(|queue| queue.borrow().len())
}

/// Settle pending effects, then run queued continuations in FIFO order.
///
/// Continuations queued while draining run in a later round, after the
/// effects they triggered have settled. Returns how many continuations ran.
pub fn flush() -> usize {
    let mut ran = 0;

    loop {
        flush_sync();

        // Take the whole round so continuations can queue more without a borrow conflict
        let round: Vec<Box<dyn FnOnce()>> =
            TICK_QUEUE.with(|queue| queue.borrow_mut().drain(..).collect());

        if round.is_empty() {
            break;
        }

        ran += round.len();
        for continuation in round {
            continuation();
        }
    }

    ran
}

/// Drop queued continuations without running them (for testing)
pub fn reset_tick_queue() {
    TICK_QUEUE.with(|queue| queue.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
