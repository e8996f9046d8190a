//! Wall-clock timers for a running game.
//!
//! The engine only emits effects. `Clock` turns them into tokio tasks:
//! a one-second countdown per attempt and a one-shot pause per
//! announcement. Their events come back on a channel and are filtered
//! through [`Clock::resolve`], which drops anything stale (a tick from a
//! replaced countdown, an announcement that was cancelled).

mod countdown;

pub use countdown::{ClockEvent, Countdown};

use std::time::Duration;

use tokio::sync::mpsc;

use crate::core::Command;
use crate::round::Effect;
use countdown::Pause;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug)]
pub struct Clock {
    tx: mpsc::Sender<ClockEvent>,
    period: Duration,
    countdown: Option<Countdown>,
    pause: Option<Pause>,
    next_token: u32,
}

impl Clock {
    /// A clock ticking once per second.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<ClockEvent>) {
        Self::with_period(Duration::from_secs(1))
    }

    #[must_use]
    pub fn with_period(period: Duration) -> (Self, mpsc::Receiver<ClockEvent>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let clock = Self {
            tx,
            period,
            countdown: None,
            pause: None,
            next_token: 0,
        };
        (clock, rx)
    }

    /// Carry out the timer effects of one transition. Other effects are
    /// ignored.
    pub fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::StartCountdown { epoch } => {
                    self.pause = None;
                    self.countdown = Some(Countdown::start(*epoch, self.period, self.tx.clone()));
                }
                Effect::StopCountdown | Effect::GameComplete => {
                    self.countdown = None;
                }
                Effect::Announce { duration_ms, .. } => {
                    self.countdown = None;
                    self.next_token = self.next_token.wrapping_add(1);
                    self.pause = Some(Pause::start(
                        self.next_token,
                        Duration::from_millis(*duration_ms),
                        self.tx.clone(),
                    ));
                }
                _ => {}
            }
        }
    }

    /// Cancel everything, e.g. on reset.
    pub fn stop_all(&mut self) {
        self.countdown = None;
        self.pause = None;
    }

    /// Epoch of the running countdown.
    #[must_use]
    pub fn running_epoch(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::epoch)
    }

    #[must_use]
    pub fn is_announcing(&self) -> bool {
        self.pause.is_some()
    }

    /// Whether `event` belongs to the current timer.
    #[must_use]
    pub fn accepts(&self, event: &ClockEvent) -> bool {
        match event {
            ClockEvent::Tick { epoch } => self.running_epoch() == Some(*epoch),
            ClockEvent::AnnouncementElapsed { token } => {
                self.pause.as_ref().is_some_and(|p| p.token == *token)
            }
        }
    }

    /// Map a current event to the engine command it stands for.
    pub fn resolve(&mut self, event: ClockEvent) -> Option<Command> {
        if !self.accepts(&event) {
            return None;
        }
        match event {
            ClockEvent::Tick { .. } => Some(Command::Tick),
            ClockEvent::AnnouncementElapsed { .. } => {
                self.pause = None;
                Some(Command::FinishAnnouncement)
            }
        }
    }
}
