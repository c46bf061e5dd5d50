// ==========================================
// 活动策划推荐引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、纯值对象
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod location;
pub mod plan;
pub mod requirements;
pub mod types;
pub mod vendor;

// 重导出核心类型
pub use location::{region_token, same_region};
pub use plan::{BudgetLine, EventPlan, PlanningStep, TimelinePhase, VendorRecommendation};
pub use requirements::EventRequirements;
pub use types::{RecommendationPriority, StepPriority};
pub use vendor::{CapacityRange, PriceRange, Vendor};
