use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::f64::consts::{PI, TAU};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Half-turn ties closer than this are treated as exact.
pub const TIE_EPSILON: f64 = 1e-9;

/// Angular spacing between neighbouring tabs on a wheel of `count` tabs.
pub fn step(count: usize) -> f64 {
    TAU / count.max(1) as f64
}

/// Wheel rotation that brings tab `index` to the center position.
pub fn compute_target_angle(index: usize, count: usize) -> f64 {
    let center = (count / 2) as f64;
    -(index as f64 - center) * step(count)
}

/// Wraps an angle into `(-PI, PI]`.
pub fn wrap(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Shortest distance around the circle, in `[0, PI]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    wrap(a - b).abs()
}

/// Rotation sense of a transition. Clockwise decreases the wheel angle, which
/// is the direction that walks the selection towards higher indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    pub fn of(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::Clockwise)
        } else if delta > 0.0 {
            Some(Self::CounterClockwise)
        } else {
            None
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }
}

/// How to break an exact half-turn tie, where both directions travel PI.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Keep spinning the way the previous transition went.
    #[default]
    #[strum(to_string = "continue", serialize = "same")]
    Continue,
    #[strum(to_string = "clockwise", serialize = "cw")]
    Clockwise,
    #[strum(to_string = "counterclockwise", serialize = "ccw")]
    CounterClockwise,
}

impl TiePolicy {
    fn resolve(self, last: Option<Spin>) -> Spin {
        match self {
            Self::Continue => last.unwrap_or(Spin::Clockwise),
            Self::Clockwise => Spin::Clockwise,
            Self::CounterClockwise => Spin::CounterClockwise,
        }
    }
}

/// Picks the representative of `target` (mod 2PI) closest to the unwrapped
/// `current` angle. The result never differs from `current` by more than PI.
pub fn shortest_path(current: f64, target: f64, last: Option<Spin>, policy: TiePolicy) -> f64 {
    let delta = wrap(target - current);

    if (delta.abs() - PI).abs() > TIE_EPSILON {
        return current + delta;
    }

    current + policy.resolve(last).sign() * PI
}
