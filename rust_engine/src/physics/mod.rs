//! 下落物理
//!
//! 只包含两部分：
//! - 自由落体时长（`t = sqrt(2·|Δh| / |g|)`）
//! - 沿下落轴的射线碰撞，求落在障碍物表面的坐标
//!
//! 不做连续模拟，也不处理多物体之间的相互作用。

mod collision;
mod fall;

pub use collision::{CollisionHit, CollisionResolver};
pub use fall::{fall_frames, fall_seconds};
