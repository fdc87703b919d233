use crate::transform::{ArcLayout, TabTransform};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps `point` (relative to the bar anchor) into the unrotated, unscaled
/// frame of a tab box centered on the origin.
fn to_tab_frame(point: Point, transform: &TabTransform) -> Point {
    let (dx, dy) = (
        point.x - transform.translate_x,
        point.y - transform.translate_y,
    );
    let (sin, cos) = transform.rotation.sin_cos();
    let scale = transform.scale.max(f64::EPSILON);

    Point::new(
        (dx * cos + dy * sin) / scale,
        (-dx * sin + dy * cos) / scale,
    )
}

fn contains(transform: &TabTransform, layout: &ArcLayout, point: Point) -> bool {
    let local = to_tab_frame(point, transform);
    local.x.abs() <= layout.tab_width / 2.0 && local.y.abs() <= layout.tab_height / 2.0
}

/// Front-most tab whose box contains `point`.
pub fn hit_test(transforms: &[TabTransform], layout: &ArcLayout, point: Point) -> Option<usize> {
    transforms
        .iter()
        .enumerate()
        .filter(|(_, t)| contains(t, layout, point))
        .max_by_key(|(_, t)| t.z_order)
        .map(|(i, _)| i)
}
