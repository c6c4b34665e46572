//! 下落请求参数

use crate::math::{Axis, FallDirection};
use crate::{DropError, Result};

/// 已在目标位置的物体如何处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarlyExit {
    /// 只跳过该物体，继续处理其余选中物体
    #[default]
    SkipObject,
    /// 停止处理整个批次（旧版插件的行为）
    AbortBatch,
}

/// 一次下落操作的参数，调用期间不可变
#[derive(Debug, Clone, PartialEq)]
pub struct FallRequest {
    /// 开始下落的帧
    pub start_frame: i32,
    /// 重力加速度，符号决定下落方向
    pub gravity: f32,
    /// 初速度（保留参数，当前不参与下落时长计算）
    pub initial_velocity: f32,
    /// 下落轴上的目标位置（无碰撞时的落点）
    pub target: f32,
    /// 弹跳落地（否则柔和落地、时长减半）
    pub bouncy: bool,
    pub axis: Axis,
    /// 启用射线碰撞检测
    pub collision_detection: bool,
    /// 落地时生成灰尘粒子
    pub particle_effect: bool,
    pub early_exit: EarlyExit,
}

impl Default for FallRequest {
    fn default() -> Self {
        Self {
            start_frame: 0,
            gravity: -9.81,
            initial_velocity: 0.0,
            target: 0.0,
            bouncy: true,
            axis: Axis::Z,
            collision_detection: false,
            particle_effect: false,
            early_exit: EarlyExit::SkipObject,
        }
    }
}

impl FallRequest {
    /// 下落方向；重力为 0 或非有限值时返回 Domain 错误
    pub fn direction(&self) -> Result<FallDirection> {
        FallDirection::from_gravity(self.gravity).ok_or_else(|| {
            DropError::Domain(format!(
                "gravity must be a non-zero finite value, got {}",
                self.gravity
            ))
        })
    }

    /// 在修改任何物体之前检查参数
    pub fn validate(&self) -> Result<FallDirection> {
        if !self.target.is_finite() {
            return Err(DropError::Domain(format!(
                "target position must be finite, got {}",
                self.target
            )));
        }
        self.direction()
    }
}
