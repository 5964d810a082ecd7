//! Automatic descent timer.
//!
//! The engine owns no clock; this timer decides when the driver should issue
//! a `move_down`. It takes `now_ms` explicitly so it can be tested without
//! sleeping.

use crate::core::{drop_speed_ms, GameState, Phase, Randomizer};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescentTimer {
    interval_ms: u64,
    /// Next firing time; `None` while paused or over.
    deadline_ms: Option<u64>,
    /// Level and phase the timer was last armed for.
    armed_for: Option<(u32, Phase)>,
}

impl DescentTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Follow `state`: re-arm when its level or phase changed since the last
    /// sync, otherwise keep the current deadline.
    pub fn sync<R: Randomizer>(&mut self, state: &GameState<R>, now_ms: u64) {
        self.sync_with(state.level(), state.phase(), now_ms);
    }

    pub fn sync_with(&mut self, level: u32, phase: Phase, now_ms: u64) {
        if self.armed_for == Some((level, phase)) {
            return;
        }

        self.armed_for = Some((level, phase));
        self.interval_ms = drop_speed_ms(level) as u64;
        // A resumed game waits a full interval; nothing is caught up.
        self.deadline_ms = match phase {
            Phase::Falling => Some(now_ms.saturating_add(self.interval_ms)),
            Phase::Paused | Phase::GameOver => None,
        };
    }

    /// Forget the arming so the next sync restarts the interval.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the timer fires at `now_ms`. Firing schedules the next
    /// deadline one interval later.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next firing, if running.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|deadline| deadline.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Falling, 0);

        assert_eq!(timer.interval_ms(), 1000);
        assert!(!timer.poll(999));
        assert!(timer.poll(1000));
        assert!(!timer.poll(1500));
        assert!(timer.poll(2000));
    }

    #[test]
    fn test_unchanged_state_keeps_deadline() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Falling, 0);
        timer.sync_with(1, Phase::Falling, 600);
        assert_eq!(timer.remaining_ms(600), Some(400));
    }

    #[test]
    fn test_level_change_rearms_with_new_speed() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Falling, 0);
        timer.sync_with(3, Phase::Falling, 500);

        assert_eq!(timer.interval_ms(), 800);
        assert!(!timer.poll(1000));
        assert!(timer.poll(1300));
    }

    #[test]
    fn test_never_fires_while_paused_or_over() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Paused, 0);
        assert!(!timer.is_running());
        assert!(!timer.poll(u64::MAX));
        assert_eq!(timer.remaining_ms(10), None);

        timer.sync_with(1, Phase::GameOver, 0);
        assert!(!timer.poll(u64::MAX));
    }

    #[test]
    fn test_resume_restarts_interval() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Falling, 0);
        timer.sync_with(1, Phase::Paused, 900);
        timer.sync_with(1, Phase::Falling, 5000);

        assert!(!timer.poll(5999));
        assert!(timer.poll(6000));
    }

    #[test]
    fn test_reset_forces_rearm() {
        let mut timer = DescentTimer::new();
        timer.sync_with(1, Phase::Falling, 0);
        timer.reset();
        timer.sync_with(1, Phase::Falling, 700);
        assert_eq!(timer.remaining_ms(700), Some(1000));
    }

    #[test]
    fn test_sync_follows_game_state() {
        let mut timer = DescentTimer::new();
        let game = GameState::new(5);
        timer.sync(&game, 0);
        assert!(timer.is_running());

        let paused = game.toggle_pause();
        timer.sync(&paused, 10);
        assert!(!timer.is_running());
    }
}
