//! 落点碰撞检测
//!
//! 对每个候选障碍物：
//! 1. 把下落物体的位置转换到障碍物局部坐标作为射线起点
//! 2. 射线指向障碍物局部原点
//! 3. 命中点在两条非下落轴上的局部坐标都为 0 才算"正下方"
//! 4. 命中点转回世界坐标，表面必须位于下落方向的前方
//! 5. 落点 = 表面坐标 − 方向 × 半尺寸
//!
//! 取第一个满足条件的障碍物，不按距离排序。

use glam::Vec3;

use crate::config::DropConfig;
use crate::host::{ObjectAccessor, ObjectId, ObjectKind, RayCaster};
use crate::math::{to_local, to_world, Axis, FallDirection};
use crate::Result;

/// 碰撞结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    /// 被击中的障碍物
    pub obstacle: ObjectId,
    /// 障碍物表面在下落轴上的世界坐标
    pub surface: f32,
    /// 下落物体中心的落点坐标（已偏移半尺寸）
    pub landing: f32,
}

/// 碰撞解析器
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    axis: Axis,
    direction: FallDirection,
    /// 以此前缀命名的物体是本工具生成的辅助对象（粒子发射器）
    helper_prefix: String,
    alignment_epsilon: f32,
    debug_log: bool,
}

impl CollisionResolver {
    pub fn new(axis: Axis, direction: FallDirection, config: &DropConfig) -> Self {
        Self {
            axis,
            direction,
            helper_prefix: config.particle_name_prefix.clone(),
            alignment_epsilon: config.alignment_epsilon,
            debug_log: config.debug_log,
        }
    }

    /// 在候选物体中查找落点
    ///
    /// 没有满足条件的命中时返回 `Ok(None)`，由调用方回退到目标位置。
    pub fn resolve<H>(
        &self,
        host: &H,
        falling: ObjectId,
        candidates: &[ObjectId],
    ) -> Result<Option<CollisionHit>>
    where
        H: ObjectAccessor + RayCaster + ?Sized,
    {
        let falling_location = host.location(falling)?;
        let half_extent = self.axis.component(host.dimensions(falling)?) * 0.5;

        for &candidate in candidates {
            if !self.is_obstacle(host, falling, candidate)? {
                continue;
            }

            let Some(surface) = self.probe(host, candidate, falling_location)? else {
                continue;
            };

            let landing = surface - self.direction.sign() * half_extent;
            if self.debug_log {
                log::debug!(
                    "[碰撞] 物体 {} 落在 {} 上: 表面={:.4}, 落点={:.4}",
                    falling, candidate, surface, landing
                );
            }

            return Ok(Some(CollisionHit {
                obstacle: candidate,
                surface,
                landing,
            }));
        }

        Ok(None)
    }

    /// 排除非网格、自身和辅助对象
    fn is_obstacle<H>(&self, host: &H, falling: ObjectId, candidate: ObjectId) -> Result<bool>
    where
        H: ObjectAccessor + ?Sized,
    {
        if candidate == falling {
            return Ok(false);
        }
        if host.kind(candidate)? != ObjectKind::Mesh {
            return Ok(false);
        }
        if !self.helper_prefix.is_empty() && host.name(candidate)?.starts_with(&self.helper_prefix) {
            return Ok(false);
        }
        Ok(true)
    }

    /// 向单个障碍物投射射线，返回表面在下落轴上的世界坐标
    fn probe<H>(&self, host: &H, candidate: ObjectId, falling_location: Vec3) -> Result<Option<f32>>
    where
        H: ObjectAccessor + RayCaster + ?Sized,
    {
        let matrix = host.world_matrix(candidate)?;

        let origin = match to_local(&matrix, falling_location) {
            Ok(origin) => origin,
            Err(e) => {
                log::warn!("[碰撞] 跳过障碍物 {}: {}", candidate, e);
                return Ok(None);
            }
        };

        // 射线指向障碍物的局部原点
        let direction = Vec3::ZERO - origin;
        let Some(hit) = host.ray_cast(candidate, origin, direction)? else {
            return Ok(None);
        };

        // 命中点必须在下落轴上，偏心的相交不算
        let aligned = self
            .axis
            .others()
            .iter()
            .all(|other| other.component(hit.location).abs() <= self.alignment_epsilon);
        if !aligned {
            return Ok(None);
        }

        let surface = self.axis.component(to_world(&matrix, hit.location));

        // 身后的物体（例如向下落时头顶的天花板）不算
        let ahead = (surface - self.axis.component(falling_location)) * self.direction.sign();
        if ahead <= 0.0 {
            return Ok(None);
        }

        Ok(Some(surface))
    }
}
