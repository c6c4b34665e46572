//! 粒子发射器挂载
//!
//! 预制发射器沿自身局部 +Z 发射。

use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::config::DropConfig;
use crate::host::{AssetImporter, ObjectAccessor, ObjectId, ParticleSettings};
use crate::math::{Axis, FallDirection};
use crate::Result;

/// 已挂载的发射器
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedEmitter {
    pub id: ObjectId,
    pub name: String,
    pub location: Vec3,
    /// 发射起止帧
    pub window: (i32, i32),
}

/// 粒子挂载器
#[derive(Debug, Clone)]
pub struct ParticleAttach {
    asset_path: PathBuf,
    object_name: String,
    name_prefix: String,
    window_frames: i32,
}

impl ParticleAttach {
    pub fn new<P: AsRef<Path>>(asset_path: P, object_name: &str, name_prefix: &str, window_frames: i32) -> Self {
        Self {
            asset_path: asset_path.as_ref().to_path_buf(),
            object_name: object_name.to_string(),
            name_prefix: name_prefix.to_string(),
            window_frames,
        }
    }

    pub fn from_config(config: &DropConfig) -> Self {
        Self::new(
            &config.particle_asset_path,
            &config.particle_object_name,
            &config.particle_name_prefix,
            config.particle_window_frames,
        )
    }

    /// 导入后的唯一名称
    pub fn emitter_name(&self, index: u32) -> String {
        format!("{}_{:03}", self.name_prefix, index)
    }

    /// 发射器欧拉角，使发射方向背离撞击面
    ///
    /// Z 轴只处理向下落的情况，向上落时返回 None，保留预制体自带的旋转。
    pub fn emitter_rotation(axis: Axis, direction: FallDirection) -> Option<Vec3> {
        match (axis, direction) {
            (Axis::X, FallDirection::Negative) => Some(Vec3::new(0.0, FRAC_PI_2, 0.0)),
            (Axis::X, FallDirection::Positive) => Some(Vec3::new(0.0, -FRAC_PI_2, 0.0)),
            (Axis::Y, FallDirection::Negative) => Some(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            (Axis::Y, FallDirection::Positive) => Some(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            (Axis::Z, FallDirection::Negative) => Some(Vec3::ZERO),
            (Axis::Z, FallDirection::Positive) => None,
        }
    }

    /// 撞击点：落点沿下落方向偏移半尺寸
    pub fn emitter_location(landing_location: Vec3, axis: Axis, direction: FallDirection, half_extent: f32) -> Vec3 {
        let surface = axis.component(landing_location) + direction.sign() * half_extent;
        axis.with_component(landing_location, surface)
    }

    /// 为已落地的物体挂载发射器
    ///
    /// # 参数
    /// - `falling`: 已移动到落点的物体
    /// - `landing_frame`: 落地帧（绝对帧号）
    /// - `index`: 命名序号
    pub fn attach<H>(
        &self,
        host: &mut H,
        falling: ObjectId,
        axis: Axis,
        direction: FallDirection,
        landing_frame: i32,
        index: u32,
    ) -> Result<AttachedEmitter>
    where
        H: ObjectAccessor + AssetImporter + ParticleSettings + ?Sized,
    {
        let landing_location = host.location(falling)?;
        let half_extent = axis.component(host.dimensions(falling)?) * 0.5;

        let id = host.import_object(&self.asset_path, &self.object_name)?;
        let name = self.emitter_name(index);
        host.set_name(id, &name)?;

        if let Some(rotation) = Self::emitter_rotation(axis, direction) {
            host.set_rotation_euler(id, rotation)?;
        }

        let location = Self::emitter_location(landing_location, axis, direction, half_extent);
        host.set_location(id, location)?;

        let window = (landing_frame, landing_frame.saturating_add(self.window_frames));
        host.set_emission_window(id, window.0, window.1)?;

        log::info!(
            "[粒子] {} 挂载到 {}: 位置=({:.3}, {:.3}, {:.3}), 发射帧 {}~{}",
            name, falling, location.x, location.y, location.z, window.0, window.1
        );

        Ok(AttachedEmitter {
            id,
            name,
            location,
            window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryScene;
    use crate::DropError;
    use glam::{EulerRot, Quat};

    fn emission_direction(rotation: Vec3) -> Vec3 {
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z) * Vec3::Z
    }

    #[test]
    fn test_rotation_points_away_from_surface() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for direction in [FallDirection::Negative, FallDirection::Positive] {
                let Some(rotation) = ParticleAttach::emitter_rotation(axis, direction) else {
                    continue;
                };
                // 发射方向与下落方向相反
                let expected = axis.unit() * -direction.sign();
                let actual = emission_direction(rotation);
                assert!(actual.abs_diff_eq(expected, 1e-5), "{axis:?} {direction:?}: {actual:?}");
            }
        }
    }

    #[test]
    fn test_upward_z_keeps_prefab_rotation() {
        assert_eq!(ParticleAttach::emitter_rotation(Axis::Z, FallDirection::Positive), None);
    }

    #[test]
    fn test_emitter_location_is_contact_point() {
        let location = ParticleAttach::emitter_location(
            Vec3::new(1.0, 2.0, 1.5),
            Axis::Z,
            FallDirection::Negative,
            0.5,
        );
        assert_eq!(location, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_attach() {
        let mut scene = MemoryScene::new();
        scene.register_prefab("fx/dust.blend", "DustEmitter", Vec3::splat(0.1));
        let cube = scene.add_mesh("Cube", Vec3::new(0.0, 0.0, 1.5), Vec3::splat(0.5));

        let attach = ParticleAttach::new("fx/dust.blend", "DustEmitter", "GravityDust", 24);
        let emitter = attach
            .attach(&mut scene, cube, Axis::Z, FallDirection::Negative, 30, 7)
            .unwrap();

        assert_eq!(emitter.name, "GravityDust_007");
        assert_eq!(scene.name(emitter.id).unwrap(), "GravityDust_007");
        assert_eq!(scene.location(emitter.id).unwrap(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(scene.emission_window(emitter.id), Some((30, 54)));
        assert_eq!(scene.rotation(emitter.id), Some(Vec3::ZERO));
    }

    #[test]
    fn test_missing_asset_is_resource_error() {
        let mut scene = MemoryScene::new();
        let cube = scene.add_mesh("Cube", Vec3::ZERO, Vec3::splat(0.5));

        let attach = ParticleAttach::new("missing.blend", "DustEmitter", "GravityDust", 24);
        let err = attach
            .attach(&mut scene, cube, Axis::Z, FallDirection::Negative, 0, 0)
            .unwrap_err();
        assert!(matches!(err, DropError::Resource(_)));
        assert_eq!(scene.object_count(), 1);
    }
}
