// ==========================================
// 活动策划推荐引擎 - 推荐理由生成引擎
// ==========================================
// 职责: 从评分同源的输入派生人类可读的推荐理由
// 红线: 规则按固定顺序独立判定, 每条规则最多产出一条理由
// 约定: 理由顺序有业务含义 (展示层按序截取 top N)
// ==========================================

use crate::domain::location::same_region;
use crate::domain::requirements::EventRequirements;
use crate::domain::vendor::Vendor;

// 理由触发阈值
const EXCELLENT_RATING_THRESHOLD: f64 = 4.5;
const HIGH_COMPATIBILITY_THRESHOLD: f64 = 80.0;

// ==========================================
// ReasoningGenerator - 推荐理由生成引擎
// ==========================================
pub struct ReasoningGenerator;

impl ReasoningGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 生成推荐理由列表
    ///
    /// 规则 (固定顺序, 各自独立判定):
    /// 1) 精确擅长匹配 (通用半分情形不产出理由)
    /// 2) 高口碑 (rating >= 4.5)
    /// 3) 同地区 (与评分引擎同一地区口径)
    /// 4) 容量精确覆盖
    /// 5) 高综合评分 (score >= 80)
    ///
    /// # 返回
    /// 有序理由列表, 无规则命中时为空列表 (合法输出)
    pub fn explain(
        &self,
        vendor: &Vendor,
        requirements: &EventRequirements,
        score: f64,
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        // 规则1: 精确擅长匹配
        if vendor.has_specialty(&requirements.event_type) {
            reasons.push(format!("Specializes in {} events", requirements.event_type));
        }

        // 规则2: 高口碑
        if vendor.rating >= EXCELLENT_RATING_THRESHOLD {
            reasons.push(format!("Excellent rating of {}/5.0", vendor.rating));
        }

        // 规则3: 同地区
        if same_region(&requirements.location, &vendor.location) {
            reasons.push(format!("Local to your area ({})", vendor.location));
        }

        // 规则4: 容量精确覆盖
        if vendor.capacity.covers(requirements.guest_count) {
            reasons.push(format!(
                "Perfect capacity match for {} guests",
                requirements.guest_count
            ));
        }

        // 规则5: 高综合评分
        if score >= HIGH_COMPATIBILITY_THRESHOLD {
            reasons.push(format!("High compatibility score ({}%)", score.round() as i64));
        }

        reasons
    }
}

impl Default for ReasoningGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::{CapacityRange, PriceRange};

    fn base_vendor() -> Vendor {
        Vendor {
            id: "TEST_V1".to_string(),
            name: "Test Vendor".to_string(),
            category: "Catering".to_string(),
            specialties: vec!["wedding".to_string()],
            price_range: PriceRange { min: 100.0, max: 200.0 },
            location: "New York, NY".to_string(),
            rating: 4.8,
            capacity: CapacityRange { min: 50, max: 500 },
            features: vec![],
        }
    }

    fn base_requirements() -> EventRequirements {
        EventRequirements::new("wedding", 20000.0, "New York, NY", 150)
    }

    #[test]
    fn test_scenario_1_all_rules_fire_in_order() {
        // 场景1: 五条规则全部命中, 顺序固定
        let generator = ReasoningGenerator::new();
        let reasons = generator.explain(&base_vendor(), &base_requirements(), 85.0);

        assert_eq!(
            reasons,
            vec![
                "Specializes in wedding events".to_string(),
                "Excellent rating of 4.8/5.0".to_string(),
                "Local to your area (New York, NY)".to_string(),
                "Perfect capacity match for 150 guests".to_string(),
                "High compatibility score (85%)".to_string(),
            ]
        );
    }

    #[test]
    fn test_scenario_2_no_rules_fire() {
        // 场景2: 无规则命中, 空列表为合法输出
        let generator = ReasoningGenerator::new();

        let mut vendor = base_vendor();
        vendor.specialties = vec!["concert".to_string()];
        vendor.rating = 3.0;
        vendor.location = "Texas, TX".to_string();
        vendor.capacity = CapacityRange { min: 500, max: 1000 };

        let reasons = generator.explain(&vendor, &base_requirements(), 40.0);
        assert!(reasons.is_empty(), "无命中应为空列表: {:?}", reasons);
    }

    #[test]
    fn test_scenario_3_generalist_match_produces_no_specialty_reason() {
        // 场景3: 通用半分匹配不产出擅长理由
        let generator = ReasoningGenerator::new();

        let mut vendor = base_vendor();
        vendor.specialties = vec!["corporate".to_string()];
        vendor.rating = 3.0;
        vendor.location = "Texas, TX".to_string();

        let reasons = generator.explain(&vendor, &base_requirements(), 50.0);
        assert!(
            !reasons.iter().any(|r| r.starts_with("Specializes")),
            "半分匹配不应有擅长理由"
        );
    }

    #[test]
    fn test_scenario_4_rating_threshold_boundary() {
        // 场景4: 口碑阈值边界 (>= 4.5 含边界)
        let generator = ReasoningGenerator::new();

        let mut vendor = base_vendor();
        vendor.rating = 4.5;
        let reasons = generator.explain(&vendor, &base_requirements(), 50.0);
        assert!(reasons.iter().any(|r| r == "Excellent rating of 4.5/5.0"));

        vendor.rating = 4.4;
        let reasons = generator.explain(&vendor, &base_requirements(), 50.0);
        assert!(!reasons.iter().any(|r| r.starts_with("Excellent rating")));
    }

    #[test]
    fn test_scenario_5_high_score_reason_rounds() {
        // 场景5: 高评分理由按四舍五入取整
        let generator = ReasoningGenerator::new();

        let reasons = generator.explain(&base_vendor(), &base_requirements(), 80.4);
        assert!(reasons.iter().any(|r| r == "High compatibility score (80%)"));

        let reasons = generator.explain(&base_vendor(), &base_requirements(), 79.9);
        assert!(
            !reasons.iter().any(|r| r.starts_with("High compatibility")),
            "低于80不应产出高评分理由"
        );
    }

    #[test]
    fn test_scenario_6_capacity_reason_boundary() {
        // 场景6: 容量边界人数 (含边界)
        let generator = ReasoningGenerator::new();

        let req = EventRequirements::new("wedding", 20000.0, "New York, NY", 500);
        let reasons = generator.explain(&base_vendor(), &req, 50.0);
        assert!(reasons.iter().any(|r| r == "Perfect capacity match for 500 guests"));

        let req = EventRequirements::new("wedding", 20000.0, "New York, NY", 501);
        let reasons = generator.explain(&base_vendor(), &req, 50.0);
        assert!(!reasons.iter().any(|r| r.starts_with("Perfect capacity")));
    }
}
