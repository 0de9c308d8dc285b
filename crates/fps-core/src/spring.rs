//! Damped spring smoothing for 2D values.
//!
//! The filter keeps the last two outputs instead of an explicit velocity:
//! velocity is reconstructed from their difference each step, so re-seating
//! both slots is all a reset needs. Integration is semi-implicit Euler on a
//! unit-mass damped oscillator.
//!
//! Tuning constants are expressed against milliseconds while callers pass
//! seconds; the conversion happens inside [`Spring::update`].

use glam::Vec2;

use crate::constants::{SPRING_DEFAULT_DAMPING, SPRING_DEFAULT_STIFFNESS, SPRING_TIME_SCALE};

/// Stiffness and damping coefficients for a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Pull toward the target per unit of displacement.
    pub stiffness: f32,
    /// Opposition to velocity.
    pub damping: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_DEFAULT_STIFFNESS,
            damping: SPRING_DEFAULT_DAMPING,
        }
    }
}

/// Stateful 2D smoothing filter. One instance per logical oscillator.
#[derive(Clone, Debug)]
pub struct Spring {
    current: Vec2,
    last: Vec2,
    config: SpringConfig,
}

impl Spring {
    pub const INVERSE_MASS: f32 = 1.0;

    /// Spring at rest on `value` with default tuning.
    pub fn new(value: Vec2) -> Self {
        Self::with_config(value, SpringConfig::default())
    }

    pub fn with_config(value: Vec2, config: SpringConfig) -> Self {
        Self {
            current: value,
            last: value,
            config,
        }
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn last(&self) -> Vec2 {
        self.last
    }

    #[inline]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Put the spring at rest on `value`, dropping any motion.
    pub fn reset(&mut self, value: Vec2) {
        self.current = value;
        self.last = value;
    }

    /// Advance one step toward `target` and return the new smoothed value.
    ///
    /// A step with `dt_sec <= 0` (or a non-finite step) leaves the state
    /// untouched and returns the current value. No stability clamp is applied
    /// to the coefficients: large steps or stiffness can diverge.
    pub fn update(&mut self, target: Vec2, dt_sec: f32) -> Vec2 {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return self.current;
        }
        let dt = dt_sec * SPRING_TIME_SCALE;
        let next = Vec2::new(
            self.tick_axis(self.last.x, self.current.x, target.x, dt),
            self.tick_axis(self.last.y, self.current.y, target.y, dt),
        );
        self.last = self.current;
        self.current = next;
        next
    }

    #[inline]
    fn tick_axis(&self, last: f32, current: f32, target: f32, dt: f32) -> f32 {
        let delta = target - current;
        let velocity = (current - last) / dt;
        let spring = self.config.stiffness * delta;
        let damper = self.config.damping * velocity;
        let acceleration = (spring - damper) * Self::INVERSE_MASS;
        let displacement = (velocity + acceleration) * dt;
        displacement + current
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_from_rest_moves_by_stiffness_fraction() {
        // From rest: velocity = 0, so displacement = stiffness * delta * dt_ms.
        let mut s = Spring::new(Vec2::ZERO);
        let out = s.update(Vec2::new(1.0, 0.0), 0.016);
        assert!((out.x - 0.16).abs() < 1e-6);
        assert_eq!(out.y, 0.0);
        assert_eq!(s.last(), Vec2::ZERO);
        assert_eq!(s.current(), out);
    }

    #[test]
    fn negative_step_is_a_no_op() {
        let mut s = Spring::new(Vec2::new(0.3, -0.2));
        s.update(Vec2::ONE, 0.016);
        let before = (s.current(), s.last());
        let out = s.update(Vec2::new(5.0, 5.0), -0.01);
        assert_eq!(out, before.0);
        assert_eq!((s.current(), s.last()), before);
    }

    #[test]
    fn reset_drops_motion() {
        let mut s = Spring::new(Vec2::ZERO);
        s.update(Vec2::ONE, 0.016);
        s.update(Vec2::ONE, 0.016);
        s.reset(Vec2::new(2.0, 2.0));
        assert_eq!(s.current(), s.last());
        assert_eq!(s.update(Vec2::new(2.0, 2.0), 0.016), Vec2::new(2.0, 2.0));
    }
}
