use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest frame the integrator will take in one step. Longer gaps (a stalled
/// frame clock, a suspended window) are treated as this long.
pub const MAX_FRAME: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement and velocity below which the spring snaps to its target.
    pub rest_threshold: f64,
}

impl SpringParams {
    /// Converts origami-style `tension`/`friction`, as accepted by mobile
    /// animation drivers, into physical stiffness and damping.
    pub fn from_origami(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
            rest_threshold: 1e-3,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_origami(50.0, 8.0)
    }
}

/// Damped spring driving a single value toward a target.
///
/// Retargeting keeps the current value and velocity, so an interrupted
/// transition continues smoothly from wherever it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
}

impl Spring {
    pub fn at_rest(value: f64, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` using semi-implicit Euler.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if self.is_settled() {
            return self.value;
        }

        let dt = dt.min(MAX_FRAME).as_secs_f64();
        if dt == 0.0 {
            return self.value;
        }

        let stiffness = self.params.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return self.value;
        }

        let damping = self.params.damping.max(0.0);
        let mass = self.params.mass.max(f64::EPSILON);

        // F = -kx - cv
        let displacement = self.value - self.target;
        let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        let threshold = self.params.rest_threshold;
        if (self.value - self.target).abs() < threshold && self.velocity.abs() < threshold {
            self.snap_to(self.target);
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_origami_defaults() {
        let params = SpringParams::default();
        assert!((params.stiffness - 266.4).abs() < 1e-9);
        assert!((params.damping - 25.0).abs() < 1e-9);
        assert!(params.damping_ratio() < 1.0);
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring = Spring::at_rest(0.0, SpringParams::default());
        spring.set_target(PI);

        let mut frames = 0;
        while !spring.is_settled() && frames < 600 {
            spring.tick(FRAME);
            frames += 1;
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), PI);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_retarget_keeps_value_and_velocity() {
        let mut spring = Spring::at_rest(0.0, SpringParams::default());
        spring.set_target(1.0);
        for _ in 0..5 {
            spring.tick(FRAME);
        }
        let (value, velocity) = (spring.value(), spring.velocity());
        assert!(velocity > 0.0);

        spring.set_target(-1.0);
        assert_eq!(spring.value(), value);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut stalled = Spring::at_rest(0.0, SpringParams::default());
        let mut clamped = stalled;
        stalled.set_target(1.0);
        clamped.set_target(1.0);

        stalled.tick(Duration::from_secs(3));
        clamped.tick(MAX_FRAME);
        assert_eq!(stalled, clamped);
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let params = SpringParams {
            stiffness: 0.0,
            ..SpringParams::default()
        };
        let mut spring = Spring::at_rest(0.0, params);
        spring.set_target(2.0);
        assert_eq!(spring.tick(FRAME), 2.0);
        assert!(spring.is_settled());
    }
}
