// ==========================================
// 策划方案 API 测试
// ==========================================
// 职责: 验证 API 层的输入校验、错误路径与评分视图
// ==========================================

use event_plan_engine::api::{ApiError, PlanApi};
use event_plan_engine::domain::requirements::EventRequirements;
use event_plan_engine::domain::types::RecommendationPriority;

// ==========================================
// 测试辅助函数
// ==========================================

fn wedding_requirements() -> EventRequirements {
    EventRequirements::new("wedding", 20000.0, "New York, NY", 150)
}

// ==========================================
// 方案生成
// ==========================================

#[test]
fn test_generate_plan_with_builtin_data() {
    let api = PlanApi::with_builtin_data();
    let plan = api.generate_plan(&wedding_requirements()).unwrap();

    assert!(!plan.vendor_recommendations.is_empty());
    assert!(!plan.planning_steps.is_empty());
    assert!(plan.total_score > 0.0);
}

#[test]
fn test_generate_plan_rejects_negative_budget() {
    let api = PlanApi::with_builtin_data();
    let req = EventRequirements::new("wedding", -100.0, "New York, NY", 150);

    let err = api.generate_plan(&req).unwrap_err();
    assert!(
        matches!(err, ApiError::InvalidInput(_)),
        "负预算应报无效输入: {err}"
    );
}

#[test]
fn test_generate_plan_rejects_non_finite_budget() {
    let api = PlanApi::with_builtin_data();

    for bad_budget in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let req = EventRequirements::new("wedding", bad_budget, "New York, NY", 150);
        assert!(
            matches!(api.generate_plan(&req), Err(ApiError::InvalidInput(_))),
            "budget={} 应被拒绝",
            bad_budget
        );
    }
}

#[test]
fn test_generate_plan_accepts_zero_budget() {
    // 零预算是合法输入, 不是错误
    let api = PlanApi::with_builtin_data();
    let req = EventRequirements::new("corporate", 0.0, "Texas, TX", 10);

    let plan = api.generate_plan(&req).unwrap();
    for line in &plan.budget_breakdown {
        assert_eq!(line.allocation, 0.0);
    }
}

#[test]
fn test_generate_plan_accepts_unknown_event_type() {
    // 未知活动类型走回退规则, 不是错误
    let api = PlanApi::with_builtin_data();
    let req = EventRequirements::new("safari", 8000.0, "Austin, TX", 40);

    assert!(api.generate_plan(&req).is_ok());
}

// ==========================================
// 单供应商评分
// ==========================================

#[test]
fn test_score_vendor_view() {
    let api = PlanApi::with_builtin_data();
    let view = api.score_vendor("1", &wedding_requirements()).unwrap();

    assert_eq!(view.vendor_id, "1");
    assert_eq!(view.vendor_name, "Elite Catering Co.");
    assert!((view.score - 75.0375).abs() < 1e-9);
    assert_eq!(view.priority, RecommendationPriority::High);

    // 分项明细与综合评分口径一致
    assert_eq!(view.breakdown.specialty, 30.0);
    assert_eq!(view.breakdown.location, 20.0);
    assert_eq!(view.breakdown.capacity, 15.0);
    assert!((view.breakdown.rating - 9.6).abs() < 1e-9);
    assert!((view.breakdown.total - view.score).abs() < 1e-12);

    // 理由按固定顺序产出
    assert_eq!(view.reasoning.len(), 4);
    assert_eq!(view.reasoning[0], "Specializes in wedding events");
}

#[test]
fn test_score_vendor_not_found() {
    let api = PlanApi::with_builtin_data();
    let err = api.score_vendor("unknown-id", &wedding_requirements()).unwrap_err();

    assert!(
        matches!(err, ApiError::NotFound { ref entity, ref id } if entity == "Vendor" && id == "unknown-id"),
        "未知供应商应报 NotFound: {err}"
    );
}

#[test]
fn test_score_vendor_view_serializes() {
    // 评分视图可直接序列化供展示层消费
    let api = PlanApi::with_builtin_data();
    let view = api.score_vendor("1", &wedding_requirements()).unwrap();

    let raw = serde_json::to_string(&view).unwrap();
    assert!(raw.contains("\"vendor_id\":\"1\""));
    assert!(raw.contains("\"breakdown\""));
}
