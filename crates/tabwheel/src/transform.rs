use crate::angle::{step, wrap};
use serde::{Deserialize, Serialize};

/// Dimensions of the arc the tabs ride on, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcLayout {
    /// Viewport width the arc is spread across.
    pub width: f64,
    pub tab_width: f64,
    pub tab_height: f64,
    /// How far the centered tab is raised above the ends of the arc.
    pub arc_height: f64,
    pub max_tilt_deg: f64,
    pub min_scale: f64,
    pub min_opacity: f64,
}

impl Default for ArcLayout {
    fn default() -> Self {
        Self {
            width: 390.0,
            tab_width: 78.0,
            tab_height: 60.0,
            arc_height: 20.0,
            max_tilt_deg: 15.0,
            min_scale: 0.85,
            min_opacity: 0.7,
        }
    }
}

impl ArcLayout {
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Horizontal semi-axis. Edge tabs stay inside the viewport.
    pub fn radius_x(&self) -> f64 {
        ((self.width - self.tab_width) / 2.0).max(0.0)
    }
}

/// Placement of one tab relative to the bar anchor (the resting center of
/// the arc). `rotation` is in radians, positive is clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_order: usize,
}

/// Angle of tab `index` measured from the center position, in `(-PI, PI]`.
pub fn local_angle(index: usize, wheel_angle: f64, count: usize) -> f64 {
    let offset = index as f64 - (count / 2) as f64;
    wrap(offset * step(count) + wheel_angle)
}

/// Steps between two tabs going the short way around the wheel.
pub fn circular_distance(a: usize, b: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let d = a.abs_diff(b) % count;
    d.min(count - d)
}

/// Stacking rank in `1..=count`, distinct per tab. The selected tab is on
/// top, then its neighbours around the wheel; equal wheel distance goes to
/// the tab closer by index, then to the lower index.
pub fn z_order(index: usize, selected: usize, count: usize) -> usize {
    let key = |i: usize| (circular_distance(i, selected, count), i.abs_diff(selected), i);
    let in_front = (0..count).filter(|&i| key(i) < key(index)).count();
    count.saturating_sub(in_front)
}

pub fn project(
    index: usize,
    wheel_angle: f64,
    selected: usize,
    count: usize,
    layout: &ArcLayout,
) -> TabTransform {
    let theta = local_angle(index, wheel_angle, count);
    // half angle walks the upper half of the ellipse from one end to the other
    let phi = theta / 2.0;
    let nearness = (1.0 + theta.cos()) / 2.0;

    TabTransform {
        translate_x: layout.radius_x() * phi.sin(),
        translate_y: -layout.arc_height * phi.cos(),
        rotation: layout.max_tilt_deg.to_radians() * phi.sin(),
        scale: layout.min_scale + (1.0 - layout.min_scale) * nearness,
        opacity: layout.min_opacity + (1.0 - layout.min_opacity) * nearness,
        z_order: z_order(index, selected, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::compute_target_angle;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_centered_tab_is_canonical() {
        let layout = ArcLayout::default();
        for count in 1..=7 {
            for selected in 0..count {
                let angle = compute_target_angle(selected, count);
                let t = project(selected, angle, selected, count, &layout);

                assert!(t.translate_x.abs() < EPS);
                assert!((t.translate_y + layout.arc_height).abs() < EPS);
                assert!(t.rotation.abs() < EPS);
                assert!((t.scale - 1.0).abs() < EPS);
                assert!((t.opacity - 1.0).abs() < EPS);
                assert_eq!(t.z_order, count);
            }
        }
    }

    #[test]
    fn test_transforms_stay_in_bounds() {
        let layout = ArcLayout::default();
        let max_tilt = 15f64.to_radians();
        for i in 0..200 {
            let angle = -10.0 + i as f64 * 0.1;
            for index in 0..5 {
                let t = project(index, angle, 2, 5, &layout);
                assert!(t.rotation.abs() <= max_tilt + EPS);
                assert!((0.85 - EPS..=1.0 + EPS).contains(&t.scale));
                assert!((0.7 - EPS..=1.0 + EPS).contains(&t.opacity));
                assert!(t.translate_x.abs() <= layout.radius_x() + EPS);
            }
        }
    }

    #[test]
    fn test_neighbours_sit_on_either_side() {
        let layout = ArcLayout::default();
        let angle = compute_target_angle(2, 5);
        let left = project(1, angle, 2, 5, &layout);
        let right = project(3, angle, 2, 5, &layout);
        let far_right = project(4, angle, 2, 5, &layout);

        assert!(left.translate_x < 0.0);
        assert!(right.translate_x > 0.0);
        assert!(far_right.translate_x > right.translate_x);
        assert!((left.translate_x + right.translate_x).abs() < EPS);
        assert!(right.scale > far_right.scale);
        assert!(right.rotation > 0.0 && left.rotation < 0.0);
    }

    #[test]
    fn test_z_order_ranks_by_wheel_distance() {
        let ranks: Vec<usize> = (0..5).map(|i| z_order(i, 2, 5)).collect();
        assert_eq!(ranks, vec![2, 4, 5, 3, 1]);
        assert_eq!(circular_distance(0, 3, 6), 3);
    }

    #[test]
    fn test_z_order_tie_goes_to_closer_index() {
        // tabs 1 and 4 are both one step from tab 0 around the wheel
        let ranks: Vec<usize> = (0..5).map(|i| z_order(i, 0, 5)).collect();
        assert_eq!(ranks, vec![5, 4, 2, 1, 3]);
        assert!(z_order(1, 0, 5) > z_order(4, 0, 5));
        assert!(z_order(2, 0, 5) > z_order(3, 0, 5));
    }

    #[test]
    fn test_z_order_ranks_are_distinct() {
        for count in 1..=8 {
            for selected in 0..count {
                let mut ranks: Vec<usize> =
                    (0..count).map(|i| z_order(i, selected, count)).collect();
                ranks.sort_unstable();
                assert_eq!(ranks, (1..=count).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_radius_never_negative() {
        let layout = ArcLayout::default().with_width(10.0);
        assert_eq!(layout.radius_x(), 0.0);
    }
}
