// ==========================================
// 活动策划推荐引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 所有错误信息包含显式原因
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入校验错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 查询错误 =====
    #[error("资源未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },
}

/// API层结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;
