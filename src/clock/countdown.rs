//! Cancellable timer tasks feeding a channel.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Something the clock observed. Becomes a [`Command`](crate::core::Command)
/// only if it is still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClockEvent {
    /// One period of the countdown started for `epoch` has elapsed.
    Tick { epoch: u32 },
    /// The announcement scheduled as `token` has run its course.
    AnnouncementElapsed { token: u32 },
}

/// A repeating countdown.
///
/// Sends `Tick { epoch }` every `period`, the first one a full period
/// after start. The task is aborted by [`Countdown::stop`] or on drop.
#[derive(Debug)]
pub struct Countdown {
    epoch: u32,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the ticking task. Must be called inside a tokio runtime.
    pub fn start(epoch: u32, period: Duration, tx: mpsc::Sender<ClockEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(ClockEvent::Tick { epoch }).await.is_err() {
                    break;
                }
            }
        });
        Self { epoch, handle }
    }

    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn stop(self) {
        // Drop aborts.
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A one-shot delay for an announcement pause.
#[derive(Debug)]
pub(crate) struct Pause {
    pub(crate) token: u32,
    handle: JoinHandle<()>,
}

impl Pause {
    pub(crate) fn start(token: u32, delay: Duration, tx: mpsc::Sender<ClockEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ClockEvent::AnnouncementElapsed { token }).await;
        });
        Self { token, handle }
    }
}

impl Drop for Pause {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let started = Instant::now();
        let _countdown = Countdown::start(4, Duration::from_secs(1), tx);

        assert_eq!(rx.recv().await, Some(ClockEvent::Tick { epoch: 4 }));
        assert_eq!(started.elapsed(), Duration::from_secs(1));
        assert_eq!(rx.recv().await, Some(ClockEvent::Tick { epoch: 4 }));
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_the_task() {
        let (tx, mut rx) = mpsc::channel(8);
        let countdown = Countdown::start(1, Duration::from_secs(1), tx);
        countdown.stop();

        // Sender dropped with the aborted task, so the channel closes.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ends_when_receiver_drops() {
        let (tx, rx) = mpsc::channel(8);
        let countdown = Countdown::start(2, Duration::from_secs(1), tx);
        assert!(!countdown.is_finished());

        drop(rx);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        tokio::task::yield_now().await;
        assert!(countdown.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_fires_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let started = Instant::now();
        let _pause = Pause::start(9, Duration::from_millis(2_500), tx);

        assert_eq!(
            rx.recv().await,
            Some(ClockEvent::AnnouncementElapsed { token: 9 })
        );
        assert_eq!(started.elapsed(), Duration::from_millis(2_500));
        assert_eq!(rx.recv().await, None);
    }
}
