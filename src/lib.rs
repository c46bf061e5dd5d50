// ==========================================
// 活动策划推荐引擎 - 核心库
// ==========================================
// 系统定位: 决策支持引擎 (规则评分, 无机器学习)
// 技术栈: Rust + serde + tracing
// 红线: 引擎纯函数化, 所有推荐必须可解释
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 目录层 - 供应商目录 (静态只读数据)
pub mod catalog;

// 配置层 - 权重表 / 活动模板 / 阶段策略
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RecommendationPriority, StepPriority};

// 领域实体
pub use domain::{
    BudgetLine, CapacityRange, EventPlan, EventRequirements, PlanningStep, PriceRange,
    TimelinePhase, Vendor, VendorRecommendation,
};

// 目录
pub use catalog::{builtin_catalog, CatalogError, VendorCatalog};

// 配置
pub use config::{
    builtin_registry, phase_policy, CategoryAllocation, ConfigError, EventTemplate, PhasePolicy,
    ScoreWeights, TemplateRegistry, DEFAULT_EVENT_TYPE,
};

// 引擎
pub use engine::{PlanSynthesizer, ReasoningGenerator, ScoreBreakdown, VendorScorer};

// API
pub use api::{ApiError, ApiResult, PlanApi, VendorScoreView};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "活动策划推荐引擎";

// ==========================================
// 预编译检查
// ==========================================
