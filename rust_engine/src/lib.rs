//! Gravity Drop - 宿主 3D 软件内的重力下落动画生成器
//!
//! 对选中的物体：
//! - 按自由落体公式计算下落时长
//! - 可选射线碰撞检测，落在障碍物表面而不是穿过去
//! - 插入起始/落地两个关键帧，并设置弹跳或柔和的插值
//! - 可选在撞击点生成灰尘粒子
//!
//! 宿主（场景、动画曲线、射线、资源导入）通过 [`host`] 中的 trait 接入。

pub mod animation;
pub mod config;
pub mod gravity;
pub mod host;
pub mod math;
pub mod particles;
pub mod physics;
pub mod plugin;

pub use animation::{Easing, Interpolation, Keyframe, KeyframeEmitter, MotionCurve};
pub use config::{get_config, reset_config, set_config, DropConfig};
pub use gravity::{
    set_gravity, set_gravity_with_config, DropOutcome, DropReport, DropSession, EarlyExit,
    FallRequest,
};
pub use host::{Host, MemoryScene, ObjectId, ObjectKind, RayHit};
pub use math::{to_local, to_world, Axis, FallDirection};
pub use particles::ParticleAttach;
pub use physics::{fall_frames, fall_seconds, CollisionResolver};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropError {
    /// 物理输入非法（例如重力为 0）
    #[error("Domain error: {0}")]
    Domain(String),

    /// 物体不满足操作前提（例如无法写入动画数据）
    #[error("Precondition error: {0}")]
    Precondition(String),

    /// 外部资源缺失（粒子资源文件或其中的子对象）
    #[error("Resource error: {0}")]
    Resource(String),

    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),
}

pub type Result<T> = std::result::Result<T, DropError>;
