//! 动画关键帧

/// 插值方式（决定到达该关键帧的段形状）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// 保持上一帧的值
    Constant,
    #[default]
    Linear,
    /// 三次缓动
    Cubic,
    /// 弹跳缓动
    Bounce,
}

/// 缓动方向
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// 按插值方式自动选择（Bounce → EaseOut，其他 → EaseIn）
    #[default]
    Auto,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// 展开 `Auto`
    pub fn resolve(self, interpolation: Interpolation) -> Easing {
        match self {
            Easing::Auto => match interpolation {
                Interpolation::Bounce => Easing::EaseOut,
                _ => Easing::EaseIn,
            },
            other => other,
        }
    }
}

/// 单条曲线上的关键帧
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub frame: i32,
    pub value: f32,
    pub interpolation: Interpolation,
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(frame: i32, value: f32) -> Self {
        Self {
            frame,
            value,
            interpolation: Interpolation::default(),
            easing: Easing::default(),
        }
    }

    pub fn with_style(mut self, interpolation: Interpolation, easing: Easing) -> Self {
        self.interpolation = interpolation;
        self.easing = easing;
        self
    }
}
