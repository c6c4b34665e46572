//! 落地粒子
//!
//! 导入预制的灰尘发射器，朝向远离撞击面，放在撞击点，
//! 并把发射窗口设置为从落地帧开始。

mod attach;

pub use attach::{AttachedEmitter, ParticleAttach};
