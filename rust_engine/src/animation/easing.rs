//! 缓动函数（Penner 公式）
//!
//! 输入输出均为 [0, 1] 的归一化进度。

use super::{Easing, Interpolation};

/// 按插值方式与缓动计算归一化进度
pub fn ease(interpolation: Interpolation, easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let easing = easing.resolve(interpolation);

    match interpolation {
        Interpolation::Constant => 0.0,
        Interpolation::Linear => t,
        Interpolation::Cubic => apply(easing, t, cubic_in),
        Interpolation::Bounce => apply(easing, t, bounce_in),
    }
}

/// 由 ease-in 函数派生 out / in-out
fn apply(easing: Easing, t: f32, ease_in: fn(f32) -> f32) -> f32 {
    match easing {
        Easing::EaseIn | Easing::Auto => ease_in(t),
        Easing::EaseOut => 1.0 - ease_in(1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                0.5 * ease_in(2.0 * t)
            } else {
                1.0 - 0.5 * ease_in(2.0 - 2.0 * t)
            }
        }
    }
}

fn cubic_in(t: f32) -> f32 {
    t * t * t
}

fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}
