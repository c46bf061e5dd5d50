// ==========================================
// 活动策划推荐引擎 - 评分权重表
// ==========================================
// 红线: 五项权重之和必须为 100, 调权不得改动评分逻辑
// ==========================================

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

// 权重之和的约定值
pub const WEIGHT_TOTAL: f64 = 100.0;

// 浮点比较容差
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// 评分权重表
///
/// 五个独立子评分的固定权重, 综合评分 = Σ(权重 × 适配度)。
/// 支持从配置数据反序列化, 以便调权而不触碰评分逻辑。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// 擅长类型匹配权重
    pub specialty: f64,

    /// 预算适配权重
    pub budget: f64,

    /// 地区匹配权重
    pub location: f64,

    /// 接待容量权重
    pub capacity: f64,

    /// 评分口碑权重
    pub rating: f64,
}

impl ScoreWeights {
    /// 权重之和
    pub fn total(&self) -> f64 {
        self.specialty + self.budget + self.location + self.capacity + self.rating
    }

    /// 校验权重表
    ///
    /// 规则:
    /// - 各项权重非负且有限
    /// - 权重之和 = 100 (容差内)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("specialty", self.specialty),
            ("budget", self.budget),
            ("location", self.location),
            ("capacity", self.capacity),
            ("rating", self.rating),
        ];

        for (name, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} 权重无效: {}",
                    name, value
                )));
            }
        }

        let total = self.total();
        if (total - WEIGHT_TOTAL).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights(format!(
                "权重之和应为 {}, 实际为 {}",
                WEIGHT_TOTAL, total
            )));
        }

        Ok(())
    }
}

impl Default for ScoreWeights {
    /// 默认权重: specialty 30 / budget 25 / location 20 / capacity 15 / rating 10
    fn default() -> Self {
        Self {
            specialty: 30.0,
            budget: 25.0,
            location: 20.0,
            capacity: 15.0,
            rating: 10.0,
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let weights = ScoreWeights::default();
        assert!((weights.total() - 100.0).abs() < WEIGHT_SUM_EPSILON);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_sum() {
        let weights = ScoreWeights {
            specialty: 30.0,
            budget: 25.0,
            location: 20.0,
            capacity: 15.0,
            rating: 20.0, // 和为110
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_weight() {
        let weights = ScoreWeights {
            specialty: 40.0,
            budget: 25.0,
            location: 20.0,
            capacity: 25.0,
            rating: -10.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_deserialize_custom_weights() {
        let raw = r#"{"specialty":40.0,"budget":20.0,"location":20.0,"capacity":10.0,"rating":10.0}"#;
        let weights: ScoreWeights = serde_json::from_str(raw).unwrap();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.specialty, 40.0);
    }
}
