pub mod angle;
pub mod feedback;
pub mod hit;
pub mod icon;
pub mod ipc;
pub mod macros;
pub mod spring;
pub mod tab;
pub mod transform;
pub mod wheel;

pub use angle::{Spin, TiePolicy, compute_target_angle};
pub use hit::Point;
pub use tab::{Route, Tab, TabName};
pub use transform::{ArcLayout, TabTransform};
pub use wheel::{Navigator, RadialTabSelector, TickOutcome, TransitionId, WheelError};
