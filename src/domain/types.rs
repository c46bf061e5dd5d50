// ==========================================
// 活动策划推荐引擎 - 领域类型定义
// ==========================================
// 红线: 推荐优先级由分数单调派生, 阈值集中定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 推荐优先级 (Recommendation Priority)
// ==========================================
// 由供应商综合评分派生的三档分级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    Low,    // 低优先级 (score < 50)
    Medium, // 中优先级 (50 <= score < 70)
    High,   // 高优先级 (score >= 70)
}

// 优先级分档阈值
pub const HIGH_PRIORITY_SCORE: f64 = 70.0;
pub const MEDIUM_PRIORITY_SCORE: f64 = 50.0;

impl RecommendationPriority {
    /// 从综合评分派生优先级
    ///
    /// 单调映射: score 越高, 优先级不降
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PRIORITY_SCORE {
            RecommendationPriority::High
        } else if score >= MEDIUM_PRIORITY_SCORE {
            RecommendationPriority::Medium
        } else {
            RecommendationPriority::Low
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationPriority::High => write!(f, "HIGH"),
            RecommendationPriority::Medium => write!(f, "MEDIUM"),
            RecommendationPriority::Low => write!(f, "LOW"),
        }
    }
}

// ==========================================
// 策划步骤优先级 (Step Priority)
// ==========================================
// 由时间线阶段位置派生 (阶段策略表见 config::phase_policy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepPriority {
    Optional,  // 可选 (后续阶段)
    Important, // 重要 (第二阶段)
    Critical,  // 关键 (首阶段)
}

impl fmt::Display for StepPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPriority::Critical => write!(f, "CRITICAL"),
            StepPriority::Important => write!(f, "IMPORTANT"),
            StepPriority::Optional => write!(f, "OPTIONAL"),
        }
    }
}
