// ==========================================
// 活动策划推荐引擎 - 供应商评分引擎
// ==========================================
// 职责: 计算单个 (供应商, 需求) 对的 0-100 适配评分
// 输入: vendor + requirements
// 输出: 综合评分 + 分项明细 (可解释性)
// 红线: 纯函数, 对任意合法输入全定义, 永不失败
// ==========================================

use crate::config::score_weights::ScoreWeights;
use crate::domain::location::same_region;
use crate::domain::requirements::EventRequirements;
use crate::domain::vendor::Vendor;
use serde::Serialize;
use serde_json::json;

// ==========================================
// 评分口径常量
// ==========================================

// 预算适配的参照口径: 单个活动按 4 个主类目均分预算。
// 固定假设, 与当前模板实际类目数无关; 改动会整体平移所有评分。
pub const PER_EVENT_BUDGET_CATEGORIES: f64 = 4.0;

// 通用型供应商标签: 声明擅长 corporate 的供应商承接其他类型活动时给半分
const GENERALIST_SPECIALTY: &str = "corporate";

// 部分得分系数
const GENERALIST_CREDIT: f64 = 0.5;      // 通用型供应商半分
const REMOTE_LOCATION_CREDIT: f64 = 0.3; // 异地供应商不排除, 降权
const UNDER_CAPACITY_CREDIT: f64 = 0.7;  // 人数低于标称下限, 大概率可承接
const OVER_CAPACITY_CREDIT: f64 = 0.3;   // 超出标称上限, 不直接淘汰

// 评分上限 (权重表之和即为100, 截断属于兜底)
const SCORE_CAP: f64 = 100.0;

// ==========================================
// ScoreBreakdown - 分项评分明细
// ==========================================

/// 分项评分明细
///
/// 每项为 "权重 × 适配度" 的实际贡献值, total 为截断后的综合评分
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub specialty: f64,
    pub budget: f64,
    pub location: f64,
    pub capacity: f64,
    pub rating: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// 生成明细 JSON (可解释性输出)
    pub fn to_json(&self) -> String {
        json!({
            "contributions": {
                "specialty": self.specialty,
                "budget": self.budget,
                "location": self.location,
                "capacity": self.capacity,
                "rating": self.rating,
            },
            "total": self.total,
        })
        .to_string()
    }
}

// ==========================================
// VendorScorer - 供应商评分引擎
// ==========================================
pub struct VendorScorer {
    weights: ScoreWeights,
}

impl VendorScorer {
    /// 创建评分引擎 (默认权重表)
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// 使用自定义权重表创建评分引擎
    ///
    /// 权重表必须通过校验 (非负, 和为100)
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, crate::config::ConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// 当前权重表
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算综合评分
    ///
    /// # 返回
    /// 0 - 100 的适配评分
    pub fn score(&self, vendor: &Vendor, requirements: &EventRequirements) -> f64 {
        self.score_breakdown(vendor, requirements).total
    }

    /// 计算综合评分及分项明细
    pub fn score_breakdown(
        &self,
        vendor: &Vendor,
        requirements: &EventRequirements,
    ) -> ScoreBreakdown {
        let specialty = self.weights.specialty * self.specialty_fit(vendor, requirements);
        let budget = self.weights.budget * self.budget_fit(vendor, requirements);
        let location = self.weights.location * self.location_fit(vendor, requirements);
        let capacity = self.weights.capacity * self.capacity_fit(vendor, requirements);
        let rating = self.weights.rating * self.rating_fit(vendor);

        // 兜底截断: 权重与系数的约定下不会超过100
        let total = (specialty + budget + location + capacity + rating).min(SCORE_CAP);

        ScoreBreakdown {
            specialty,
            budget,
            location,
            capacity,
            rating,
            total,
        }
    }

    // ==========================================
    // 五个子评分 (各自返回 [0, 1] 适配度)
    // ==========================================

    /// 擅长类型匹配
    ///
    /// 规则:
    /// 1) 精确命中活动类型 → 1.0
    /// 2) 通用型供应商 (声明 corporate) 承接非 corporate 活动 → 0.5
    /// 3) 其他 → 0.0
    fn specialty_fit(&self, vendor: &Vendor, requirements: &EventRequirements) -> f64 {
        if vendor.has_specialty(&requirements.event_type) {
            return 1.0;
        }

        if requirements.event_type != GENERALIST_SPECIALTY
            && vendor.has_specialty(GENERALIST_SPECIALTY)
        {
            return GENERALIST_CREDIT;
        }

        0.0
    }

    /// 预算适配
    ///
    /// 以 "总预算 / 4" 为单类目参照预算, 供应商均价越接近参照越高分:
    /// fit = max(0, 1 - |avg_price - per_category| / per_category)
    ///
    /// 边界处理: 参照预算为 0 (含总预算为0) 时适配度记 0, 不做除零
    fn budget_fit(&self, vendor: &Vendor, requirements: &EventRequirements) -> f64 {
        let per_category_budget = requirements.budget / PER_EVENT_BUDGET_CATEGORIES;
        if per_category_budget <= 0.0 {
            return 0.0;
        }

        let avg_price = vendor.avg_price();
        (1.0 - (avg_price - per_category_budget).abs() / per_category_budget).max(0.0)
    }

    /// 地区匹配
    ///
    /// 地区令牌一致 → 1.0; 异地 → 0.3 (地理维度不做硬排除)
    fn location_fit(&self, vendor: &Vendor, requirements: &EventRequirements) -> f64 {
        if same_region(&requirements.location, &vendor.location) {
            1.0
        } else {
            REMOTE_LOCATION_CREDIT
        }
    }

    /// 接待容量匹配
    ///
    /// 人数落在标称区间 → 1.0; 低于下限 → 0.7; 高于上限 → 0.3
    fn capacity_fit(&self, vendor: &Vendor, requirements: &EventRequirements) -> f64 {
        if vendor.capacity.covers(requirements.guest_count) {
            1.0
        } else if requirements.guest_count < vendor.capacity.min {
            UNDER_CAPACITY_CREDIT
        } else {
            OVER_CAPACITY_CREDIT
        }
    }

    /// 评分口碑
    ///
    /// 线性映射: rating / 5 (目录不变量保证 rating ∈ [0, 5])
    fn rating_fit(&self, vendor: &Vendor) -> f64 {
        vendor.rating / 5.0
    }
}

impl Default for VendorScorer {
    fn default() -> Self {
        Self::new()
    }
}
