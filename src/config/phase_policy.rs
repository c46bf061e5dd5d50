// ==========================================
// 活动策划推荐引擎 - 阶段策略表
// ==========================================
// 职责: 时间线阶段位置 → 步骤优先级/预估时长 的显式映射
// 约定: 阶段顺序有业务含义, 首阶段任务最关键
// ==========================================

use crate::domain::types::StepPriority;

/// 单个阶段位置的步骤策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePolicy {
    pub priority: StepPriority,
    pub estimated_duration: &'static str,
}

// 前两个阶段位置有专属策略, 其余统一按后续阶段处理
const EARLY_PHASE_POLICIES: [PhasePolicy; 2] = [
    // 阶段0: 关键任务
    PhasePolicy {
        priority: StepPriority::Critical,
        estimated_duration: "2-3 weeks",
    },
    // 阶段1: 重要任务
    PhasePolicy {
        priority: StepPriority::Important,
        estimated_duration: "1-2 weeks",
    },
];

// 阶段2及以后: 可选任务
const LATE_PHASE_POLICY: PhasePolicy = PhasePolicy {
    priority: StepPriority::Optional,
    estimated_duration: "3-5 days",
};

/// 按阶段位置查询步骤策略
pub fn phase_policy(phase_index: usize) -> &'static PhasePolicy {
    EARLY_PHASE_POLICIES
        .get(phase_index)
        .unwrap_or(&LATE_PHASE_POLICY)
}
