//! Countdown timer queue.
//!
//! Replaces an engine-global timer manager with a queue owned by the
//! simulation. Timers count down by the frame's elapsed time and hand
//! their actions back to the engine, which runs them on the simulation
//! thread between systems.

use hecs::Entity;

use space_shooter_core::types::TimerHandle;

/// Remaining time at or below this counts as expired.
const EXPIRY_EPSILON: f64 = 1e-9;

/// What to do when a timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// The ship's gun may fire again.
    ShotCooldownExpired { ship: Entity },
}

impl TimerAction {
    fn target(&self) -> Entity {
        match *self {
            TimerAction::ShotCooldownExpired { ship } => ship,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingTimer {
    handle: TimerHandle,
    remaining_secs: f64,
    action: TimerAction,
}

/// One-shot timers, kept in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<PendingTimer>,
    next_handle: u32,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once after `delay_secs`.
    /// Negative or non-finite delays fire on the next advance.
    pub fn set_timer(&mut self, delay_secs: f64, action: TimerAction) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        let remaining_secs = if delay_secs.is_finite() {
            delay_secs.max(0.0)
        } else {
            0.0
        };
        self.timers.push(PendingTimer {
            handle,
            remaining_secs,
            action,
        });
        handle
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn clear(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Cancel every timer whose action targets `entity`.
    pub fn clear_for(&mut self, entity: Entity) {
        self.timers.retain(|t| t.action.target() != entity);
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Seconds left on a pending timer.
    pub fn remaining(&self, handle: TimerHandle) -> Option<f64> {
        self.timers
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.remaining_secs)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Count every timer down by `dt` and return the actions of those that
    /// expired, in the order they were scheduled.
    pub fn advance(&mut self, dt: f64) -> Vec<TimerAction> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut fired = Vec::new();
        self.timers.retain_mut(|timer| {
            timer.remaining_secs -= dt;
            if timer.remaining_secs <= EXPIRY_EPSILON {
                fired.push(timer.action);
                false
            } else {
                true
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Entity {
        let mut world = hecs::World::new();
        world.spawn(())
    }

    #[test]
    fn test_timer_fires_once_after_delay() {
        let ship = ship();
        let mut timers = TimerQueue::new();
        let handle = timers.set_timer(0.1, TimerAction::ShotCooldownExpired { ship });

        assert!(timers.advance(0.05).is_empty());
        assert!(timers.is_active(handle));
        assert!((timers.remaining(handle).unwrap() - 0.05).abs() < 1e-12);

        let fired = timers.advance(0.05);
        assert_eq!(fired, vec![TimerAction::ShotCooldownExpired { ship }]);
        assert!(!timers.is_active(handle));
        assert!(timers.advance(1.0).is_empty());
    }

    #[test]
    fn test_timer_survives_accumulated_rounding() {
        let ship = ship();
        let mut timers = TimerQueue::new();
        timers.set_timer(0.1, TimerAction::ShotCooldownExpired { ship });

        let dt = 1.0 / 60.0;
        for _ in 0..5 {
            assert!(timers.advance(dt).is_empty());
        }
        assert_eq!(timers.advance(dt).len(), 1);
    }

    #[test]
    fn test_clear_cancels_timer() {
        let ship = ship();
        let mut timers = TimerQueue::new();
        let a = timers.set_timer(0.1, TimerAction::ShotCooldownExpired { ship });
        let b = timers.set_timer(0.2, TimerAction::ShotCooldownExpired { ship });
        assert_ne!(a, b);

        assert!(timers.clear(a));
        assert!(!timers.clear(a));
        assert_eq!(timers.len(), 1);

        timers.clear_for(ship);
        assert!(timers.is_empty());
        assert!(timers.advance(1.0).is_empty());
    }

    #[test]
    fn test_fired_in_schedule_order() {
        let mut world = hecs::World::new();
        let first = world.spawn(());
        let second = world.spawn(());
        let mut timers = TimerQueue::new();
        timers.set_timer(0.3, TimerAction::ShotCooldownExpired { ship: first });
        timers.set_timer(0.1, TimerAction::ShotCooldownExpired { ship: second });

        let fired = timers.advance(0.5);
        assert_eq!(
            fired,
            vec![
                TimerAction::ShotCooldownExpired { ship: first },
                TimerAction::ShotCooldownExpired { ship: second },
            ]
        );
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let ship = ship();
        let mut timers = TimerQueue::new();
        let handle = timers.set_timer(0.1, TimerAction::ShotCooldownExpired { ship });
        timers.advance(-5.0);
        assert!((timers.remaining(handle).unwrap() - 0.1).abs() < 1e-12);
    }
}
