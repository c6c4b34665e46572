//! 重力下落配置
//!
//! 所有参数扁平化，直接在代码中修改默认值即可。

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 重力下落配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct DropConfig {
    // ========== 时间 ==========
    /// 宿主帧率，默认 24.0
    pub frame_rate: f32,

    // ========== 粒子 ==========
    /// 粒子发射窗口长度（帧），默认 24（24fps 下一秒）
    pub particle_window_frames: i32,
    /// 粒子预制资源文件路径
    pub particle_asset_path: String,
    /// 资源文件中粒子发射器子对象的名称
    pub particle_object_name: String,
    /// 导入后重命名用的前缀，同时用于在碰撞检测中识别辅助对象
    pub particle_name_prefix: String,

    // ========== 容差 ==========
    /// 命中点非下落轴坐标视为 0 的容差
    pub alignment_epsilon: f32,
    /// 当前位置与目标位置视为相等的容差
    pub position_epsilon: f32,

    // ========== 调试 ==========
    /// 是否输出逐物体调试日志，默认 false
    pub debug_log: bool,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            // ====== 时间 ======
            // 关键帧以帧为单位，秒数乘以帧率后截断为整数
            frame_rate: 24.0,

            // ====== 粒子 ======
            // 落地后粒子持续发射的帧数
            particle_window_frames: 24,
            particle_asset_path: "assets/dust_particles.blend".to_string(),
            particle_object_name: "DustEmitter".to_string(),
            particle_name_prefix: "GravityDust".to_string(),

            // ====== 容差 ======
            // 射线命中点在障碍物局部坐标下的离轴误差
            // 太小 → 浮点误差导致正下方的障碍物也被拒绝
            // 太大 → 偏心的障碍物也会被当作落点
            alignment_epsilon: 1e-4,
            position_epsilon: 1e-6,

            // ====== 调试 ======
            debug_log: false,
        }
    }
}

/// 全局配置实例
static DROP_CONFIG: Lazy<RwLock<DropConfig>> = Lazy::new(|| RwLock::new(DropConfig::default()));

/// 获取当前配置（只读）
pub fn get_config() -> DropConfig {
    match DROP_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 手动设置配置（用于运行时调试）
pub fn set_config(config: DropConfig) {
    match DROP_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// 重置为默认配置
pub fn reset_config() {
    set_config(DropConfig::default());
}
