//! 操作与面板描述

/// 操作描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// 是否进入宿主的撤销栈
    pub undo: bool,
}

/// 侧边栏面板描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    pub id: &'static str,
    /// 所在编辑器
    pub space: &'static str,
    /// 编辑器中的区域
    pub region: &'static str,
    /// 侧边栏标签页
    pub category: &'static str,
    pub label: &'static str,
    /// 面板上的按钮（按顺序）
    pub operators: &'static [&'static str],
}

pub const SET_GRAVITY: OperatorInfo = OperatorInfo {
    id: "anim.set_gravity",
    label: "Gravity settings",
    description: "Keyframe a gravity drop for the selected objects",
    undo: true,
};

pub const ADVANCE_PARTICLE_COUNTER: OperatorInfo = OperatorInfo {
    id: "anim.advance_particle_counter",
    label: "Next particle name",
    description: "Advance the counter used to name imported dust emitters",
    undo: false,
};

pub const GRAVITY_PANEL: PanelInfo = PanelInfo {
    id: "VIEW3D_PT_gravity",
    space: "VIEW_3D",
    region: "UI",
    category: "Gravity",
    label: "Gravity addon",
    operators: &[SET_GRAVITY.id, ADVANCE_PARTICLE_COUNTER.id],
};
