//! 重力下落 - 组合碰撞、下落时长、关键帧与粒子
//!
//! 对每个选中的物体：
//! 碰撞检测（可选）→ 落点与下落时长 → 关键帧 → 粒子（可选）

mod report;
mod request;
mod session;
mod set_gravity;

pub use report::{DropOutcome, DropReport};
pub use request::{EarlyExit, FallRequest};
pub use session::DropSession;
pub use set_gravity::{set_gravity, set_gravity_with_config};
