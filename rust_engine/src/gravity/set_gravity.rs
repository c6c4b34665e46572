//! 重力下落主流程

use crate::animation::KeyframeEmitter;
use crate::config::{get_config, DropConfig};
use crate::host::{Host, ObjectId};
use crate::math::FallDirection;
use crate::particles::ParticleAttach;
use crate::physics::{fall_frames, CollisionResolver};
use crate::{DropError, Result};

use super::{DropOutcome, DropReport, DropSession, EarlyExit, FallRequest};

/// 对当前选中的物体生成下落动画（使用全局配置）
pub fn set_gravity<H>(host: &mut H, session: &mut DropSession, request: &FallRequest) -> Result<DropReport>
where
    H: Host + ?Sized,
{
    set_gravity_with_config(host, session, request, &get_config())
}

/// 对当前选中的物体生成下落动画
///
/// # 错误
/// - `Domain`: 重力为 0 等非法输入，此时不修改任何物体
/// - `Resource`: 粒子资源缺失，已处理的物体保持修改（不回滚）
///
/// 无法写入动画的物体记为 `DropOutcome::Skipped`，不中断批次。
pub fn set_gravity_with_config<H>(
    host: &mut H,
    session: &mut DropSession,
    request: &FallRequest,
    config: &DropConfig,
) -> Result<DropReport>
where
    H: Host + ?Sized,
{
    let direction = request.validate()?;

    let selection = host.selected_objects();
    let candidates = if request.collision_detection {
        host.scene_objects()
    } else {
        Vec::new()
    };

    log::info!(
        "[重力] {} 个物体, 轴={:?}, g={}, 起始帧={}, 弹跳={}, 碰撞={}, 粒子={}",
        selection.len(),
        request.axis,
        request.gravity,
        request.start_frame,
        request.bouncy,
        request.collision_detection,
        request.particle_effect
    );

    let dropper = ObjectDrop {
        request,
        config,
        direction,
        candidates,
        resolver: CollisionResolver::new(request.axis, direction, config),
        emitter: KeyframeEmitter::new(request.bouncy),
        particles: request
            .particle_effect
            .then(|| ParticleAttach::from_config(config)),
    };

    let mut report = DropReport::default();
    for id in selection {
        match dropper.run(&mut *host, session, id) {
            Ok(DropOutcome::AlreadyAtTarget) => {
                report.outcomes.push((id, DropOutcome::AlreadyAtTarget));
                if request.early_exit == EarlyExit::AbortBatch {
                    log::info!("[重力] 物体 {} 已在目标位置，停止处理剩余物体", id);
                    report.aborted = true;
                    break;
                }
            }
            Ok(outcome) => report.outcomes.push((id, outcome)),
            Err(DropError::Precondition(reason)) => {
                log::warn!("[重力] 跳过物体 {}: {}", id, reason);
                report.outcomes.push((id, DropOutcome::Skipped { reason }));
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "[重力] 完成: {}/{} 个物体写入关键帧",
        report.landed_count(),
        report.outcomes.len()
    );

    Ok(report)
}

/// 单个物体的处理上下文
struct ObjectDrop<'a> {
    request: &'a FallRequest,
    config: &'a DropConfig,
    direction: FallDirection,
    candidates: Vec<ObjectId>,
    resolver: CollisionResolver,
    emitter: KeyframeEmitter,
    particles: Option<ParticleAttach>,
}

impl ObjectDrop<'_> {
    fn run<H>(&self, host: &mut H, session: &mut DropSession, id: ObjectId) -> Result<DropOutcome>
    where
        H: Host + ?Sized,
    {
        let axis = self.request.axis;
        let current = host.location_component(id, axis)?;

        let collision = if self.request.collision_detection {
            self.resolver.resolve(&*host, id, &self.candidates)?
        } else {
            None
        };
        let target = collision.map_or(self.request.target, |hit| hit.landing);

        if (current - target).abs() <= self.config.position_epsilon {
            if self.config.debug_log {
                log::debug!("[重力] 物体 {} 已在 {:.4}，无需下落", id, target);
            }
            return Ok(DropOutcome::AlreadyAtTarget);
        }

        let frames = fall_frames(current, target, self.request.gravity, self.config.frame_rate)?;
        let keys = self
            .emitter
            .emit(&mut *host, id, axis, self.request.start_frame, frames, target)?;

        if self.config.debug_log {
            log::debug!(
                "[重力] 物体 {}: {:.4} -> {:.4}, 下落 {} 帧, 关键帧 {}~{}",
                id, current, target, frames, keys.start_frame, keys.landing_frame
            );
        }

        let emitter = match &self.particles {
            Some(particles) => {
                let attached = particles.attach(
                    &mut *host,
                    id,
                    axis,
                    self.direction,
                    keys.landing_frame,
                    session.particle_counter(),
                )?;
                session.advance_particle_counter();
                Some(attached.name)
            }
            None => None,
        };

        Ok(DropOutcome::Landed {
            start_frame: keys.start_frame,
            landing_frame: keys.landing_frame,
            fall_frames: frames,
            landing_value: target,
            obstacle: collision.map(|hit| hit.obstacle),
            emitter,
        })
    }
}
