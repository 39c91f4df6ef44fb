//! Quiescence-window debouncing for search and price-slider input.
//!
//! The filter pass only runs once input stops arriving for the window;
//! intermediate values are replaced, never queued. Modeled as an explicit
//! start/reset/cancel timer task instead of a closure over a timeout handle.

use std::time::Duration;

use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    task::JoinHandle,
    time::sleep,
};

/// Window used by the storefront for search text and price-ceiling input.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Trailing-edge debouncer: after [`Debouncer::submit`] goes quiet for the
/// window, the last submitted value is delivered on the output channel.
///
/// Each submit resets the pending timer; dropping or cancelling the debouncer
/// discards any pending value.
pub struct Debouncer<T> {
    input: UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration) -> (Self, UnboundedReceiver<T>) {
        let (input, mut pending_rx) = unbounded_channel::<T>();
        let (settled_tx, settled_rx) = unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            while let Some(mut pending) = pending_rx.recv().await {
                loop {
                    tokio::select! {
                        next = pending_rx.recv() => match next {
                            // Newer value: restart the quiescence window.
                            Some(value) => pending = value,
                            None => return,
                        },
                        _ = sleep(window) => {
                            let _ = settled_tx.send(pending);
                            break;
                        }
                    }
                }
            }
        });

        (Self { input, task }, settled_rx)
    }

    /// Feeds one input event; replaces whatever was pending.
    pub fn submit(&self, value: T) {
        let _ = self.input.send(value);
    }

    /// Drops the pending value and stops the timer task.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
