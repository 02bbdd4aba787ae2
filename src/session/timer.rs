// src/session/timer.rs

use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a running per-question countdown.
///
/// The task calls `on_tick(epoch)` once per tick until the callback returns
/// `false`. Dropping or cancelling the handle aborts the task; the callback
/// must still compare the epoch against the live one, because a tick that
/// already woke up can race with the abort.
#[derive(Debug)]
pub struct CountdownHandle {
    epoch: u64,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    pub fn spawn<F>(epoch: u64, tick: Duration, on_tick: F) -> Self
    where
        F: Fn(u64) -> bool + Send + 'static,
    {
        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(tick).await;
                if !on_tick(epoch) {
                    break;
                }
            }
        });

        Self { epoch, task }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_callback_declines() {
        let ticks = Arc::new(AtomicU32::new(0));
        let counter = ticks.clone();

        let handle = CountdownHandle::spawn(7, Duration::from_secs(1), move |epoch| {
            assert_eq!(epoch, 7);
            counter.fetch_add(1, Ordering::SeqCst) + 1 < 3
        });
        assert_eq!(handle.epoch(), 7);

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_further_ticks() {
        let ticks = Arc::new(AtomicU32::new(0));
        let counter = ticks.clone();

        let handle = CountdownHandle::spawn(1, Duration::from_secs(1), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }
}
