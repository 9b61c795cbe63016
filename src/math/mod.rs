pub mod phase;
pub mod range;
pub mod vec3;

pub use phase::{approach_factor, wrap_phase};
pub use range::AxisRange;
pub use vec3::Vec3;
