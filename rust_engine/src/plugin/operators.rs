//! 操作实现
//!
//! 宿主属性面板传入的原始值（例如轴的整数编码）只在这里转换。

use crate::gravity::{set_gravity, DropReport, DropSession, EarlyExit, FallRequest};
use crate::host::Host;
use crate::math::Axis;
use crate::{DropError, Result};

/// "Gravity settings" 操作
#[derive(Debug, Clone, Default)]
pub struct SetGravityOperator {
    pub request: FallRequest,
}

impl SetGravityOperator {
    /// 从宿主属性构造
    ///
    /// # 参数
    /// - `axis_index`: 0 = X, 1 = Y, 2 = Z
    #[allow(clippy::too_many_arguments)]
    pub fn from_properties(
        start_frame: i32,
        gravity: f32,
        initial_velocity: f32,
        final_position: f32,
        axis_index: usize,
        bouncy: bool,
        collision_detection: bool,
        particle_effect: bool,
    ) -> Result<Self> {
        let axis = Axis::from_index(axis_index)
            .ok_or_else(|| DropError::Domain(format!("invalid fall axis index {axis_index}")))?;

        Ok(Self {
            request: FallRequest {
                start_frame,
                gravity,
                initial_velocity,
                target: final_position,
                bouncy,
                axis,
                collision_detection,
                particle_effect,
                early_exit: EarlyExit::SkipObject,
            },
        })
    }

    pub fn execute<H: Host + ?Sized>(&self, host: &mut H, session: &mut DropSession) -> Result<DropReport> {
        set_gravity(host, session, &self.request)
    }
}

/// 推进粒子命名计数器的操作
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvanceParticleCounterOperator;

impl AdvanceParticleCounterOperator {
    pub fn execute(&self, session: &mut DropSession) -> u32 {
        let counter = session.advance_particle_counter();
        log::info!("[粒子] 命名计数器推进到 {}", counter);
        counter
    }
}
