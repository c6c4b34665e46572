//! 内存场景 - 参考宿主实现
//!
//! 不依赖真实的 3D 软件，实现全部宿主能力：
//! - 物体的位置 / 欧拉旋转 / 缩放 / 局部包围盒
//! - 网格使用 Rapier 的形状做局部坐标射线求交
//! - 每个物体三条位置曲线
//! - 预制资源库充当资源导入器

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use glam::{EulerRot, Mat4, Quat, Vec3};
use rapier3d::math::{Point, Real, Vector};
use rapier3d::parry::query::{Ray, RayCast};
use rapier3d::prelude::SharedShape;

use crate::animation::{Easing, Interpolation, Keyframe, MotionCurve};
use crate::math::Axis;
use crate::{DropError, Result};

use super::{
    AnimationStore, AssetImporter, ObjectAccessor, ObjectId, ObjectKind, ParticleSettings,
    RayCaster, RayHit, SelectionProvider,
};

/// 场景物体
#[derive(Clone)]
struct SceneEntry {
    name: String,
    kind: ObjectKind,
    location: Vec3,
    /// 欧拉角（XYZ，弧度）
    rotation: Vec3,
    scale: Vec3,
    /// 局部坐标下的半尺寸
    half_extents: Vec3,
    /// 局部坐标下的碰撞形状（仅网格）
    shape: Option<SharedShape>,
    /// 能否写入动画数据
    animatable: bool,
    /// 位置曲线（X/Y/Z），首次插帧时创建
    curves: Option<[MotionCurve; 3]>,
    /// 是否带粒子系统
    has_particles: bool,
    emission_window: Option<(i32, i32)>,
}

impl SceneEntry {
    fn new(name: &str, kind: ObjectKind, location: Vec3, half_extents: Vec3) -> Self {
        let shape = match kind {
            ObjectKind::Mesh => Some(SharedShape::cuboid(
                half_extents.x,
                half_extents.y,
                half_extents.z,
            )),
            ObjectKind::Empty | ObjectKind::Other => None,
        };

        Self {
            name: name.to_string(),
            kind,
            location,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            half_extents,
            shape,
            animatable: true,
            curves: None,
            has_particles: false,
            emission_window: None,
        }
    }

    fn world_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.location)
    }
}

/// 内存场景
#[derive(Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, SceneEntry>,
    selection: Vec<ObjectId>,
    /// 资源文件 → (子对象名称 → 半尺寸)
    library: HashMap<PathBuf, HashMap<String, Vec3>>,
    next_id: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, entry: SceneEntry) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        self.objects.insert(id, entry);
        id
    }

    fn entry(&self, id: ObjectId) -> Result<&SceneEntry> {
        self.objects.get(&id).ok_or(DropError::UnknownObject(id))
    }

    fn entry_mut(&mut self, id: ObjectId) -> Result<&mut SceneEntry> {
        self.objects.get_mut(&id).ok_or(DropError::UnknownObject(id))
    }

    /// 添加长方体网格
    pub fn add_mesh(&mut self, name: &str, location: Vec3, half_extents: Vec3) -> ObjectId {
        self.insert(SceneEntry::new(name, ObjectKind::Mesh, location, half_extents))
    }

    /// 添加空物体（不参与碰撞）
    pub fn add_empty(&mut self, name: &str, location: Vec3) -> ObjectId {
        self.insert(SceneEntry::new(name, ObjectKind::Empty, location, Vec3::ZERO))
    }

    pub fn set_rotation(&mut self, id: ObjectId, rotation: Vec3) -> Result<()> {
        self.entry_mut(id)?.rotation = rotation;
        Ok(())
    }

    pub fn set_scale(&mut self, id: ObjectId, scale: Vec3) -> Result<()> {
        self.entry_mut(id)?.scale = scale;
        Ok(())
    }

    /// 模拟无法写入动画数据的物体
    pub fn set_animatable(&mut self, id: ObjectId, animatable: bool) {
        if let Some(entry) = self.objects.get_mut(&id) {
            entry.animatable = animatable;
        }
    }

    pub fn select(&mut self, id: ObjectId) {
        if self.objects.contains_key(&id) && !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// 读取某轴的位置曲线
    pub fn curve(&self, id: ObjectId, axis: Axis) -> Option<&MotionCurve> {
        self.objects
            .get(&id)?
            .curves
            .as_ref()
            .map(|curves| &curves[axis.index()])
    }

    pub fn emission_window(&self, id: ObjectId) -> Option<(i32, i32)> {
        self.objects.get(&id)?.emission_window
    }

    pub fn rotation(&self, id: ObjectId) -> Option<Vec3> {
        self.objects.get(&id).map(|entry| entry.rotation)
    }

    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| *id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// 在资源库中登记一个可导入的粒子发射器
    pub fn register_prefab<P: AsRef<Path>>(&mut self, path: P, object_name: &str, half_extents: Vec3) {
        self.library
            .entry(path.as_ref().to_path_buf())
            .or_default()
            .insert(object_name.to_string(), half_extents);
    }
}

impl SelectionProvider for MemoryScene {
    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selection.clone()
    }

    fn scene_objects(&self) -> Vec<ObjectId> {
        self.objects.keys().copied().collect()
    }
}

impl ObjectAccessor for MemoryScene {
    fn location(&self, id: ObjectId) -> Result<Vec3> {
        Ok(self.entry(id)?.location)
    }

    fn set_location(&mut self, id: ObjectId, location: Vec3) -> Result<()> {
        self.entry_mut(id)?.location = location;
        Ok(())
    }

    fn dimensions(&self, id: ObjectId) -> Result<Vec3> {
        let entry = self.entry(id)?;
        Ok(entry.half_extents * 2.0 * entry.scale.abs())
    }

    fn world_matrix(&self, id: ObjectId) -> Result<Mat4> {
        Ok(self.entry(id)?.world_matrix())
    }

    fn name(&self, id: ObjectId) -> Result<String> {
        Ok(self.entry(id)?.name.clone())
    }

    fn set_name(&mut self, id: ObjectId, name: &str) -> Result<()> {
        self.entry_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn kind(&self, id: ObjectId) -> Result<ObjectKind> {
        Ok(self.entry(id)?.kind)
    }

    fn set_rotation_euler(&mut self, id: ObjectId, rotation: Vec3) -> Result<()> {
        self.set_rotation(id, rotation)
    }
}

impl AnimationStore for MemoryScene {
    fn insert_location_keyframe(&mut self, id: ObjectId, frame: i32) -> Result<()> {
        let entry = self.entry_mut(id)?;
        if !entry.animatable {
            return Err(DropError::Precondition(format!(
                "object '{}' cannot hold animation data",
                entry.name
            )));
        }

        let location = entry.location;
        let curves = entry.curves.get_or_insert_with(Default::default);
        for axis in Axis::ALL {
            curves[axis.index()].insert(frame, axis.component(location));
        }
        Ok(())
    }

    fn motion_curves(&self, id: ObjectId) -> Result<Vec<usize>> {
        let entry = self.entry(id)?;
        Ok(match entry.curves {
            Some(_) => Axis::ALL.iter().map(|axis| axis.index()).collect(),
            None => Vec::new(),
        })
    }

    fn keyframe(&self, id: ObjectId, curve: usize, frame: i32) -> Result<Option<Keyframe>> {
        let entry = self.entry(id)?;
        Ok(entry
            .curves
            .as_ref()
            .and_then(|curves| curves.get(curve))
            .and_then(|c| c.get(frame).copied()))
    }

    fn set_keyframe_style(
        &mut self,
        id: ObjectId,
        curve: usize,
        frame: i32,
        interpolation: Interpolation,
        easing: Easing,
    ) -> Result<()> {
        let entry = self.entry_mut(id)?;
        let updated = entry
            .curves
            .as_mut()
            .and_then(|curves| curves.get_mut(curve))
            .map(|c| c.set_style(frame, interpolation, easing))
            .unwrap_or(false);

        if updated {
            Ok(())
        } else {
            Err(DropError::Precondition(format!(
                "object '{}' has no keyframe at frame {} on curve {}",
                entry.name, frame, curve
            )))
        }
    }
}

impl RayCaster for MemoryScene {
    fn ray_cast(&self, id: ObjectId, origin: Vec3, direction: Vec3) -> Result<Option<RayHit>> {
        let entry = self.entry(id)?;
        let Some(shape) = entry.shape.as_ref() else {
            return Ok(None);
        };
        if direction.length_squared() <= f32::EPSILON {
            return Ok(None);
        }

        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(direction.x, direction.y, direction.z),
        );

        // 实心求交：起点在形状内部时命中点即起点
        Ok(shape.cast_local_ray(&ray, Real::MAX, true).map(|toi| RayHit {
            location: origin + direction * toi,
            distance: toi * direction.length(),
        }))
    }
}

impl AssetImporter for MemoryScene {
    fn import_object(&mut self, path: &Path, object_name: &str) -> Result<ObjectId> {
        let objects = self.library.get(path).ok_or_else(|| {
            DropError::Resource(format!("asset file not found: {}", path.display()))
        })?;
        let half_extents = *objects.get(object_name).ok_or_else(|| {
            DropError::Resource(format!(
                "object '{}' not found in {}",
                object_name,
                path.display()
            ))
        })?;

        let mut entry = SceneEntry::new(object_name, ObjectKind::Mesh, Vec3::ZERO, half_extents);
        entry.has_particles = true;
        Ok(self.insert(entry))
    }
}

impl ParticleSettings for MemoryScene {
    fn set_emission_window(&mut self, id: ObjectId, frame_start: i32, frame_end: i32) -> Result<()> {
        let entry = self.entry_mut(id)?;
        if !entry.has_particles {
            return Err(DropError::Precondition(format!(
                "object '{}' has no particle system",
                entry.name
            )));
        }
        entry.emission_window = Some((frame_start, frame_end));
        Ok(())
    }
}
