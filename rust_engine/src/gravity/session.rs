//! 会话状态
//!
//! 跨多次调用共享的唯一状态是粒子命名计数器，由会话显式持有。

/// 重力下落会话
#[derive(Debug, Clone, Default)]
pub struct DropSession {
    particle_counter: u32,
}

impl DropSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从指定计数开始（例如宿主保存过的值）
    pub fn with_particle_counter(counter: u32) -> Self {
        Self {
            particle_counter: counter,
        }
    }

    /// 下一个粒子发射器使用的序号
    pub fn particle_counter(&self) -> u32 {
        self.particle_counter
    }

    /// 推进计数器，返回新值
    pub fn advance_particle_counter(&mut self) -> u32 {
        self.particle_counter = self.particle_counter.wrapping_add(1);
        self.particle_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_advances() {
        let mut session = DropSession::new();
        assert_eq!(session.particle_counter(), 0);
        assert_eq!(session.advance_particle_counter(), 1);
        assert_eq!(session.advance_particle_counter(), 2);
        assert_eq!(session.particle_counter(), 2);
    }

    #[test]
    fn test_resume_from_saved_counter() {
        let mut session = DropSession::with_particle_counter(41);
        assert_eq!(session.advance_particle_counter(), 42);
    }
}
