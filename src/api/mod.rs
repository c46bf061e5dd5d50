// ==========================================
// 活动策划推荐引擎 - API 层
// ==========================================
// 职责: 面向协作方的业务接口, 输入校验与错误转换
// ==========================================

pub mod error;
pub mod plan_api;

pub use error::{ApiError, ApiResult};
pub use plan_api::{PlanApi, VendorScoreView};
