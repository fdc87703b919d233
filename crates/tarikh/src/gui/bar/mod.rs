pub mod model;
pub mod view;

pub use model::{PageNavigator, TabBar};
pub use view::draw;

pub const BAR_HEIGHT: i32 = 110; // drawing area height
pub const BOTTOM_PADDING: f64 = 12.0; // gap between resting tabs and the window edge
pub const ICON_SIZE: i32 = 24;
pub const CORNER_RADIUS: f64 = 30.0; // bar background top corners
pub const BUTTON_RADIUS: f64 = 15.0;
pub const LABEL_SIZE: f64 = 11.0;
pub const INDICATOR_RADIUS: f64 = 2.0;
pub const ACTIVE_BG_ALPHA: f64 = 0.05;
