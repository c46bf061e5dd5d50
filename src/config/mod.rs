// ==========================================
// 活动策划推荐引擎 - 配置层
// ==========================================
// 职责: 评分权重表、活动模板注册表、阶段策略表
// 红线: 配置为进程级只读数据, 初始化后不再变更
// ==========================================

pub mod phase_policy;
pub mod score_weights;
pub mod template_registry;

pub use phase_policy::{phase_policy, PhasePolicy};
pub use score_weights::ScoreWeights;
pub use template_registry::{
    builtin_registry, CategoryAllocation, EventTemplate, TemplateRegistry, DEFAULT_EVENT_TYPE,
};

use thiserror::Error;

// ==========================================
// ConfigError - 配置层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置数据解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("评分权重配置无效: {0}")]
    InvalidWeights(String),

    #[error("模板注册表缺少默认回退模板: {0}")]
    MissingDefaultTemplate(String),

    #[error("活动类型重复注册: {0}")]
    DuplicateEventType(String),
}
