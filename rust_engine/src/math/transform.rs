//! 局部/世界坐标转换
//!
//! `world_matrix` 为物体的世界放置矩阵（缩放 * 旋转 * 平移）。

use glam::{Mat4, Vec3};

use crate::{DropError, Result};

/// 行列式低于此值的矩阵视为不可逆（例如某轴缩放为 0）
const MIN_DETERMINANT: f32 = 1e-12;

/// 世界坐标 → 物体局部坐标
pub fn to_local(world_matrix: &Mat4, world_point: Vec3) -> Result<Vec3> {
    let det = world_matrix.determinant();
    if !det.is_finite() || det.abs() < MIN_DETERMINANT {
        return Err(DropError::Domain(format!(
            "placement transform is not invertible (det = {det})"
        )));
    }
    Ok(world_matrix.inverse().transform_point3(world_point))
}

/// 物体局部坐标 → 世界坐标
pub fn to_world(world_matrix: &Mat4, local_point: Vec3) -> Vec3 {
    world_matrix.transform_point3(local_point)
}
