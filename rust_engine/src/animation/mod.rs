//! 动画系统 - 关键帧、运动曲线与下落关键帧生成
//!
//! 每个物体的位置动画按轴拆成三条 [`MotionCurve`]，
//! 段的形状由段末关键帧的插值方式与缓动决定。

mod easing;
mod emitter;
mod keyframe;
mod motion_curve;

pub use easing::ease;
pub use emitter::{EmittedKeys, KeyframeEmitter, LandingStyle};
pub use keyframe::{Easing, Interpolation, Keyframe};
pub use motion_curve::MotionCurve;
