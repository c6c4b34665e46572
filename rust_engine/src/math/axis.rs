//! 下落轴与下落方向

use glam::Vec3;

/// 下落轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 宿主侧使用的整数编码（0/1/2）
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// 从宿主的整数编码转换，越界返回 None
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    /// 另外两个轴（用于命中点对齐检查）
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// 取向量在该轴上的分量
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// 返回替换该轴分量后的向量
    pub fn with_component(self, mut v: Vec3, value: f32) -> Vec3 {
        v[self.index()] = value;
        v
    }
}

/// 下落方向，由重力符号决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallDirection {
    /// 沿轴正方向下落
    Positive,
    /// 沿轴负方向下落（常见的"向下"）
    Negative,
}

impl FallDirection {
    /// 重力为 0 或非有限值时没有方向
    pub fn from_gravity(gravity: f32) -> Option<Self> {
        if !gravity.is_finite() || gravity == 0.0 {
            None
        } else if gravity > 0.0 {
            Some(FallDirection::Positive)
        } else {
            Some(FallDirection::Negative)
        }
    }

    /// +1.0 / -1.0
    pub fn sign(self) -> f32 {
        match self {
            FallDirection::Positive => 1.0,
            FallDirection::Negative => -1.0,
        }
    }
}
