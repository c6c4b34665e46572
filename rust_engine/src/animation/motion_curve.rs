//! 运动曲线
//!
//! 存储单个位置分量的所有关键帧，并提供查找和插值功能

use std::collections::BTreeMap;

use super::easing::ease;
use super::{Easing, Interpolation, Keyframe};

/// 单轴运动曲线
#[derive(Debug, Clone, Default)]
pub struct MotionCurve {
    /// 关键帧映射（帧索引 -> 关键帧）
    keyframes: BTreeMap<i32, Keyframe>,
}

impl MotionCurve {
    pub fn new() -> Self {
        Self {
            keyframes: BTreeMap::new(),
        }
    }

    /// 插入关键帧
    ///
    /// 同一帧已有关键帧时只覆盖数值，保留其插值设置。
    pub fn insert(&mut self, frame: i32, value: f32) {
        self.keyframes
            .entry(frame)
            .and_modify(|kf| kf.value = value)
            .or_insert_with(|| Keyframe::new(frame, value));
    }

    /// 查找精确帧
    pub fn get(&self, frame: i32) -> Option<&Keyframe> {
        self.keyframes.get(&frame)
    }

    pub fn set_style(&mut self, frame: i32, interpolation: Interpolation, easing: Easing) -> bool {
        match self.keyframes.get_mut(&frame) {
            Some(kf) => {
                kf.interpolation = interpolation;
                kf.easing = easing;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// 求值指定帧（支持帧间插值），空曲线返回 None
    pub fn evaluate(&self, frame: f32) -> Option<f32> {
        let (prev, next) = self.search_closest(frame);

        match (prev, next) {
            (None, None) => None,
            (Some(kf), None) | (None, Some(kf)) => Some(kf.value),
            (Some(prev), Some(next)) => {
                let span = (next.frame - prev.frame) as f32;
                let t = (frame - prev.frame as f32) / span;
                let progress = ease(next.interpolation, next.easing, t);
                Some(prev.value + (next.value - prev.value) * progress)
            }
        }
    }

    /// 查找最近的前后关键帧
    fn search_closest(&self, frame: f32) -> (Option<&Keyframe>, Option<&Keyframe>) {
        let mut prev = None;
        let mut next = None;

        for kf in self.keyframes.values() {
            if kf.frame as f32 <= frame {
                prev = Some(kf);
            } else {
                next = Some(kf);
                break;
            }
        }

        (prev, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(keys: &[(i32, f32)]) -> MotionCurve {
        let mut curve = MotionCurve::new();
        for &(frame, value) in keys {
            curve.insert(frame, value);
        }
        curve
    }

    #[test]
    fn test_empty_curve() {
        assert_eq!(MotionCurve::new().evaluate(3.0), None);
    }

    #[test]
    fn test_holds_outside_range() {
        let c = curve(&[(10, 1.0), (20, 3.0)]);
        assert_eq!(c.evaluate(0.0), Some(1.0));
        assert_eq!(c.evaluate(25.0), Some(3.0));
    }

    #[test]
    fn test_linear_segment() {
        let c = curve(&[(0, 5.0), (10, 0.0)]);
        let v = c.evaluate(5.0).unwrap();
        assert!((v - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_segment_uses_end_key_style() {
        let mut c = curve(&[(0, 5.0), (24, 0.0)]);
        assert!(c.set_style(24, Interpolation::Cubic, Easing::EaseIn));
        // ease-in 前半段几乎不动
        let v = c.evaluate(6.0).unwrap();
        assert!(v > 4.9, "v = {v}");
        assert!((c.evaluate(24.0).unwrap()).abs() < 1e-6);
    }

    #[test]
    fn test_reinsert_keeps_style() {
        let mut c = curve(&[(0, 1.0)]);
        c.set_style(0, Interpolation::Bounce, Easing::EaseOut);
        c.insert(0, 2.0);
        let kf = c.get(0).unwrap();
        assert_eq!(kf.value, 2.0);
        assert_eq!(kf.interpolation, Interpolation::Bounce);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_set_style_missing_frame() {
        let mut c = curve(&[(0, 1.0)]);
        assert!(!c.set_style(7, Interpolation::Cubic, Easing::EaseIn));
    }
}
