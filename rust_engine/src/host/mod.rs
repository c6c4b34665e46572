//! 宿主能力接口
//!
//! 场景物体由宿主持有，本库只通过以下 trait 读取几何、修改位置与动画。
//!
//! | 能力 | trait |
//! |------|-------|
//! | 选中物体 / 场景物体 | [`SelectionProvider`] |
//! | 位置、尺寸、世界矩阵、名称、类型 | [`ObjectAccessor`] |
//! | 关键帧与动画曲线 | [`AnimationStore`] |
//! | 射线求交 | [`RayCaster`] |
//! | 资源导入 | [`AssetImporter`] |
//! | 粒子发射窗口 | [`ParticleSettings`] |

mod memory_scene;

pub use memory_scene::MemoryScene;

use std::fmt;
use std::path::Path;

use glam::{Mat4, Vec3};

use crate::animation::{Easing, Interpolation, Keyframe};
use crate::math::Axis;
use crate::Result;

/// 宿主物体句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 物体类型（只有网格参与碰撞检测）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Empty,
    Other,
}

/// 射线命中结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// 命中点（被检测物体的局部坐标）
    pub location: Vec3,
    /// 起点到命中点的距离（局部坐标单位）
    pub distance: f32,
}

/// 选中物体与场景物体
pub trait SelectionProvider {
    /// 当前选中的物体（有序）
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// 场景中所有物体，作为碰撞候选
    fn scene_objects(&self) -> Vec<ObjectId>;
}

/// 物体属性读写
pub trait ObjectAccessor {
    fn location(&self, id: ObjectId) -> Result<Vec3>;

    fn set_location(&mut self, id: ObjectId, location: Vec3) -> Result<()>;

    /// 各轴包围盒尺寸（世界尺度）
    fn dimensions(&self, id: ObjectId) -> Result<Vec3>;

    /// 世界放置矩阵
    fn world_matrix(&self, id: ObjectId) -> Result<Mat4>;

    fn name(&self, id: ObjectId) -> Result<String>;

    fn set_name(&mut self, id: ObjectId, name: &str) -> Result<()>;

    fn kind(&self, id: ObjectId) -> Result<ObjectKind>;

    /// 设置欧拉角旋转（XYZ 顺序，弧度）
    fn set_rotation_euler(&mut self, id: ObjectId, rotation: Vec3) -> Result<()>;

    fn location_component(&self, id: ObjectId, axis: Axis) -> Result<f32> {
        Ok(axis.component(self.location(id)?))
    }

    fn set_location_component(&mut self, id: ObjectId, axis: Axis, value: f32) -> Result<()> {
        let location = self.location(id)?;
        self.set_location(id, axis.with_component(location, value))
    }
}

/// 动画曲线存储
///
/// 位置动画每个轴一条曲线，曲线索引即轴索引。
pub trait AnimationStore {
    /// 以物体当前位置在 `frame` 插入位置关键帧（三轴）
    fn insert_location_keyframe(&mut self, id: ObjectId, frame: i32) -> Result<()>;

    /// 物体已有的运动曲线索引
    fn motion_curves(&self, id: ObjectId) -> Result<Vec<usize>>;

    /// 读取某条曲线在 `frame` 的关键帧
    fn keyframe(&self, id: ObjectId, curve: usize, frame: i32) -> Result<Option<Keyframe>>;

    /// 修改某条曲线在 `frame` 的关键帧插值与缓动
    fn set_keyframe_style(
        &mut self,
        id: ObjectId,
        curve: usize,
        frame: i32,
        interpolation: Interpolation,
        easing: Easing,
    ) -> Result<()>;
}

/// 射线求交
pub trait RayCaster {
    /// 在物体局部坐标系中投射射线，`direction` 不要求归一化
    fn ray_cast(&self, id: ObjectId, origin: Vec3, direction: Vec3) -> Result<Option<RayHit>>;
}

/// 资源导入
pub trait AssetImporter {
    /// 从资源文件导入指定名称的物体，返回导入后的句柄
    fn import_object(&mut self, path: &Path, object_name: &str) -> Result<ObjectId>;
}

/// 粒子系统设置
pub trait ParticleSettings {
    /// 设置发射起止帧
    fn set_emission_window(&mut self, id: ObjectId, frame_start: i32, frame_end: i32) -> Result<()>;
}

/// 完整宿主
pub trait Host:
    SelectionProvider + ObjectAccessor + AnimationStore + RayCaster + AssetImporter + ParticleSettings
{
}

impl<T> Host for T where
    T: SelectionProvider + ObjectAccessor + AnimationStore + RayCaster + AssetImporter + ParticleSettings
{
}
