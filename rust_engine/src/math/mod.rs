//! 数学基础 - 下落轴与坐标系转换

mod axis;
mod transform;

pub use axis::{Axis, FallDirection};
pub use transform::{to_local, to_world};
