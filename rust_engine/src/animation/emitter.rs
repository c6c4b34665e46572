//! 下落关键帧生成
//!
//! 每个物体写入两个关键帧：起始帧（下落前位置）与落地帧（落点位置），
//! 只修改落地帧的插值与缓动。

use crate::host::{AnimationStore, ObjectAccessor, ObjectId};
use crate::math::Axis;
use crate::{DropError, Result};

use super::{Easing, Interpolation};

/// 落地风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingStyle {
    /// 弹跳：完整下落时长，Bounce / EaseOut
    Bouncy,
    /// 柔和：下落时长减半，Cubic / EaseIn
    Soft,
}

impl LandingStyle {
    pub fn from_bouncy(bouncy: bool) -> Self {
        if bouncy {
            LandingStyle::Bouncy
        } else {
            LandingStyle::Soft
        }
    }

    pub fn interpolation(self) -> Interpolation {
        match self {
            LandingStyle::Bouncy => Interpolation::Bounce,
            LandingStyle::Soft => Interpolation::Cubic,
        }
    }

    pub fn easing(self) -> Easing {
        match self {
            LandingStyle::Bouncy => Easing::EaseOut,
            LandingStyle::Soft => Easing::EaseIn,
        }
    }

    /// 起始帧到落地帧的偏移
    ///
    /// 至少 1 帧，保证起始帧和落地帧是两个不同的关键帧。
    pub fn landing_offset(self, fall_frames: u32) -> i32 {
        let frames = match self {
            LandingStyle::Bouncy => fall_frames,
            LandingStyle::Soft => fall_frames / 2,
        };
        i32::try_from(frames.max(1)).unwrap_or(i32::MAX)
    }
}

/// 已写入的关键帧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedKeys {
    pub start_frame: i32,
    pub landing_frame: i32,
    pub style: LandingStyle,
}

/// 关键帧生成器
#[derive(Debug, Clone, Copy)]
pub struct KeyframeEmitter {
    style: LandingStyle,
}

impl KeyframeEmitter {
    pub fn new(bouncy: bool) -> Self {
        Self {
            style: LandingStyle::from_bouncy(bouncy),
        }
    }

    pub fn landing_frame(&self, start_frame: i32, fall_frames: u32) -> i32 {
        start_frame.saturating_add(self.style.landing_offset(fall_frames))
    }

    /// 写入起始帧与落地帧
    ///
    /// # 参数
    /// - `axis`: 下落轴
    /// - `fall_frames`: 完整下落时长（帧）
    /// - `landing_value`: 落点在下落轴上的坐标
    pub fn emit<H>(
        &self,
        host: &mut H,
        id: ObjectId,
        axis: Axis,
        start_frame: i32,
        fall_frames: u32,
        landing_value: f32,
    ) -> Result<EmittedKeys>
    where
        H: ObjectAccessor + AnimationStore + ?Sized,
    {
        let landing_frame = self.landing_frame(start_frame, fall_frames);

        // 起始帧：记录下落前位置
        host.insert_location_keyframe(id, start_frame)?;

        // 没有曲线时不移动物体
        let curves = host.motion_curves(id)?;
        if curves.is_empty() {
            return Err(DropError::Precondition(format!(
                "object {id} has no motion curves after keyframe insertion"
            )));
        }

        // 移动到落点后记录落地帧
        host.set_location_component(id, axis, landing_value)?;
        host.insert_location_keyframe(id, landing_frame)?;

        for curve in curves {
            host.set_keyframe_style(
                id,
                curve,
                landing_frame,
                self.style.interpolation(),
                self.style.easing(),
            )?;
        }

        Ok(EmittedKeys {
            start_frame,
            landing_frame,
            style: self.style,
        })
    }
}
