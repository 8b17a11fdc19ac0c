//! Playback controller
//!
//! A two-state machine (`Paused`/`Playing`) over a trace of fixed length. The
//! controller never looks at steps, only at indices, so one implementation
//! serves every algorithm.
//!
//! # Timer model
//!
//! While playing, exactly one tick is pending. A tick is identified by a
//! [`TimerToken`] carrying the generation it was scheduled in; pausing,
//! changing speed or installing a new trace bumps the generation, so a tick
//! scheduled before that point is ignored if it is ever delivered. Ticks are
//! due `base_interval / speed` after they were scheduled.
//!
//! The event loop drives the timer with [`PlaybackController::poll`] and a
//! clock reading. An external scheduler can instead hold on to
//! [`PlaybackController::pending_token`] and deliver it through
//! [`PlaybackController::fire`].

use crate::algorithms::constants::BASE_INTERVAL;
use crate::algorithms::errors::InputError;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Playback speed multiplier (always positive and finite)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    pub const HALF: Speed = Speed(0.5);
    pub const NORMAL: Speed = Speed(1.0);
    pub const FAST: Speed = Speed(1.5);
    pub const DOUBLE: Speed = Speed(2.0);

    /// The nominal speeds offered by the controls, slowest first
    pub const PRESETS: [Speed; 4] = [Speed::HALF, Speed::NORMAL, Speed::FAST, Speed::DOUBLE];

    pub fn new(multiplier: f64) -> Result<Self, InputError> {
        if multiplier.is_finite() && multiplier > 0.0 {
            Ok(Speed(multiplier))
        } else {
            Err(InputError::InvalidSpeed(multiplier))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Tick interval at this speed
    pub fn interval(self, base: Duration) -> Duration {
        base.div_f64(self.0)
    }

    /// The next faster preset, wrapping around to the slowest
    pub fn next_preset(self) -> Speed {
        Speed::PRESETS
            .into_iter()
            .find(|p| p.0 > self.0)
            .unwrap_or(Speed::PRESETS[0])
    }

    /// The next slower preset, wrapping around to the fastest
    pub fn prev_preset(self) -> Speed {
        Speed::PRESETS
            .into_iter()
            .rev()
            .find(|p| p.0 < self.0)
            .unwrap_or(Speed::PRESETS[Speed::PRESETS.len() - 1])
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::NORMAL
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

impl FromStr for Speed {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().trim_end_matches(|c| c == 'x' || c == 'X');
        let value: f64 = raw.parse().map_err(|_| InputError::InvalidSpeed(f64::NAN))?;
        Speed::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Identity of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    token: TimerToken,
    due: Instant,
}

/// What a delivered tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Moved to the given index. Reaching the last step also pauses.
    Advanced(usize),
    /// Was already at the last step (a single-step trace); playback paused
    Finished,
    /// Nothing due, not playing, or a stale token
    Idle,
}

/// Play/pause/seek/speed state machine over a trace of `len` steps
#[derive(Debug)]
pub struct PlaybackController {
    len: usize,
    current: usize,
    state: PlaybackState,
    speed: Speed,
    base_interval: Duration,
    pending: Option<PendingTick>,
    generation: u64,
}

impl PlaybackController {
    /// Controller for a trace of `len` steps. A trace always has at least one
    /// step, so `len` is clamped to 1.
    pub fn new(len: usize, base_interval: Duration) -> Self {
        PlaybackController {
            len: len.max(1),
            current: 0,
            state: PlaybackState::Paused,
            speed: Speed::NORMAL,
            base_interval,
            pending: None,
            generation: 0,
        }
    }

    /// Switch to a freshly generated trace: cancel any pending tick and go
    /// back to `(index 0, Paused)`. Speed is kept.
    pub fn install(&mut self, len: usize, base_interval: Duration) {
        self.cancel();
        self.len = len.max(1);
        self.base_interval = base_interval;
        self.current = 0;
        self.state = PlaybackState::Paused;
        tracing::debug!(len = self.len, "installed trace");
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a controller tracks at least one step
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current + 1 >= self.len
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Current tick interval (`base / speed`)
    pub fn interval(&self) -> Duration {
        self.speed.interval(self.base_interval)
    }

    /// Token of the pending tick, if one is scheduled
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending.map(|p| p.token)
    }

    /// When the pending tick is due
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Play/pause toggle. At the last step this replays from the start
    /// instead of toggling.
    pub fn play(&mut self, now: Instant) {
        if self.is_at_end() {
            self.current = 0;
            self.state = PlaybackState::Playing;
            self.schedule(now);
            tracing::debug!("replaying from start");
        } else if self.is_playing() {
            self.pause();
        } else {
            self.state = PlaybackState::Playing;
            self.schedule(now);
            tracing::debug!(index = self.current, "playing");
        }
    }

    pub fn pause(&mut self) {
        self.cancel();
        if self.is_playing() {
            tracing::debug!(index = self.current, "paused");
        }
        self.state = PlaybackState::Paused;
    }

    /// Move one step forward and pause. At the last step nothing changes.
    pub fn step_forward(&mut self) -> bool {
        if self.current + 1 >= self.len {
            return false;
        }
        self.pause();
        self.current += 1;
        true
    }

    /// Move one step back and pause. At the first step nothing changes.
    pub fn step_backward(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.pause();
        self.current -= 1;
        true
    }

    /// Jump to the first step and pause
    pub fn rewind_to_start(&mut self) {
        self.pause();
        self.current = 0;
    }

    /// Jump to the last step and pause
    pub fn jump_to_end(&mut self) {
        self.pause();
        self.current = self.len - 1;
    }

    /// Change the tick interval. A pending tick is replaced by one due a
    /// full new interval from `now`.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        if self.is_playing() {
            self.schedule(now);
        }
        tracing::debug!(%speed, "speed changed");
    }

    /// Deliver a tick. Stale or unexpected tokens are ignored.
    pub fn fire(&mut self, token: TimerToken, now: Instant) -> Tick {
        match self.pending {
            Some(p) if p.token == token && self.is_playing() => {}
            _ => return Tick::Idle,
        }
        self.pending = None;

        if self.current + 1 >= self.len {
            self.pause();
            tracing::debug!("playback complete");
            return Tick::Finished;
        }

        self.current += 1;
        tracing::trace!(index = self.current, "tick");
        if self.is_at_end() {
            self.pause();
            tracing::debug!("playback complete");
        } else {
            self.schedule(now);
        }
        Tick::Advanced(self.current)
    }

    /// Deliver the pending tick if it is due at `now`
    pub fn poll(&mut self, now: Instant) -> Tick {
        match self.pending {
            Some(p) if now >= p.due => self.fire(p.token, now),
            _ => Tick::Idle,
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.cancel();
        self.pending = Some(PendingTick {
            token: TimerToken(self.generation),
            due: now + self.interval(),
        });
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!(generation = self.generation, "cancelled tick");
        }
        self.generation += 1;
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(1, BASE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_validation() {
        assert!(Speed::new(0.0).is_err());
        assert!(Speed::new(-1.0).is_err());
        assert!(Speed::new(f64::INFINITY).is_err());
        assert_eq!("1.5x".parse::<Speed>().map(Speed::get), Ok(1.5));
        assert_eq!("2".parse::<Speed>().map(Speed::get), Ok(2.0));
        assert!("fast".parse::<Speed>().is_err());
    }

    #[test]
    fn test_speed_presets_cycle() {
        assert_eq!(Speed::NORMAL.next_preset(), Speed::FAST);
        assert_eq!(Speed::DOUBLE.next_preset(), Speed::HALF);
        assert_eq!(Speed::HALF.prev_preset(), Speed::DOUBLE);
        assert_eq!(Speed::new(1.2).map(Speed::next_preset), Ok(Speed::FAST));
    }

    #[test]
    fn test_interval_scales_with_speed() {
        let base = Duration::from_millis(1000);
        assert_eq!(Speed::DOUBLE.interval(base), Duration::from_millis(500));
        assert_eq!(Speed::HALF.interval(base), Duration::from_millis(2000));
    }

    #[test]
    fn test_single_step_trace_plays_and_stops() {
        let t0 = Instant::now();
        let mut pc = PlaybackController::new(1, Duration::from_millis(100));
        pc.play(t0);
        assert!(pc.is_playing());
        assert_eq!(pc.poll(t0 + Duration::from_millis(100)), Tick::Finished);
        assert!(!pc.is_playing());
        assert_eq!(pc.current_index(), 0);
    }
}
