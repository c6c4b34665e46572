//! 插件注册 - 向宿主声明操作和面板
//!
//! 进程启动时 [`register`]，退出时 [`unregister`]。

mod descriptors;
mod operators;

pub use descriptors::{
    OperatorInfo, PanelInfo, ADVANCE_PARTICLE_COUNTER, GRAVITY_PANEL, SET_GRAVITY,
};
pub use operators::{AdvanceParticleCounterOperator, SetGravityOperator};

use crate::Result;

/// 宿主的类注册表
pub trait HostRegistry {
    fn register_operator(&mut self, info: &OperatorInfo) -> Result<()>;

    fn unregister_operator(&mut self, id: &str) -> Result<()>;

    fn register_panel(&mut self, info: &PanelInfo) -> Result<()>;

    fn unregister_panel(&mut self, id: &str) -> Result<()>;
}

/// 注册全部操作和面板（面板引用操作，最后注册）
pub fn register<R: HostRegistry + ?Sized>(registry: &mut R) -> Result<()> {
    registry.register_operator(&SET_GRAVITY)?;
    registry.register_operator(&ADVANCE_PARTICLE_COUNTER)?;
    registry.register_panel(&GRAVITY_PANEL)?;
    log::info!("[插件] 已注册 {} 面板", GRAVITY_PANEL.label);
    Ok(())
}

/// 按注册的逆序注销
///
/// 未注册的类只记录警告，继续注销其余的类。
pub fn unregister<R: HostRegistry + ?Sized>(registry: &mut R) {
    if let Err(e) = registry.unregister_panel(GRAVITY_PANEL.id) {
        log::warn!("[插件] 注销面板 {} 失败: {}", GRAVITY_PANEL.id, e);
    }
    for info in [&ADVANCE_PARTICLE_COUNTER, &SET_GRAVITY] {
        if let Err(e) = registry.unregister_operator(info.id) {
            log::warn!("[插件] 注销操作 {} 失败: {}", info.id, e);
        }
    }
}
