//! 批次结果

use crate::host::ObjectId;

/// 单个物体的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// 已写入下落关键帧
    Landed {
        start_frame: i32,
        landing_frame: i32,
        /// 完整下落时长（帧），柔和落地时落地帧只偏移一半
        fall_frames: u32,
        /// 下落轴上的落点
        landing_value: f32,
        /// 落在其上的障碍物
        obstacle: Option<ObjectId>,
        /// 挂载的粒子发射器名称
        emitter: Option<String>,
    },
    /// 已在目标位置，未做任何修改
    AlreadyAtTarget,
    /// 不满足前提条件，跳过
    Skipped { reason: String },
}

/// 一次 `set_gravity` 的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropReport {
    /// 按处理顺序排列
    pub outcomes: Vec<(ObjectId, DropOutcome)>,
    /// 批次是否因 `EarlyExit::AbortBatch` 提前结束
    pub aborted: bool,
}

impl DropReport {
    pub fn outcome(&self, id: ObjectId) -> Option<&DropOutcome> {
        self.outcomes
            .iter()
            .find(|(object, _)| *object == id)
            .map(|(_, outcome)| outcome)
    }

    pub fn landed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, DropOutcome::Landed { .. }))
            .count()
    }
}
