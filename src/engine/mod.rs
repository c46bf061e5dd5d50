// ==========================================
// 活动策划推荐引擎 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎, 纯函数, 无副作用
// 红线: 引擎不持有可变状态, 所有推荐必须输出 reason
// ==========================================

pub mod planner;
pub mod reasoning;
pub mod scorer;

// 重导出核心引擎
pub use planner::PlanSynthesizer;
pub use reasoning::ReasoningGenerator;
pub use scorer::{ScoreBreakdown, VendorScorer};
