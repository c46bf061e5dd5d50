// ==========================================
// 活动策划推荐引擎 - 策划方案 API
// ==========================================
// 职责: 方案生成与单供应商评分的对外入口
// 约定: 引擎核心对合法类型全定义; API层只拒绝数值非法的预算
//       (负数 / NaN / 无穷), 未知活动类型与空字符串按回退规则处理
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::{builtin_catalog, VendorCatalog};
use crate::config::template_registry::{builtin_registry, TemplateRegistry};
use crate::domain::plan::EventPlan;
use crate::domain::requirements::EventRequirements;
use crate::domain::types::RecommendationPriority;
use crate::engine::planner::PlanSynthesizer;
use crate::engine::reasoning::ReasoningGenerator;
use crate::engine::scorer::{ScoreBreakdown, VendorScorer};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

// ==========================================
// VendorScoreView - 单供应商评分视图
// ==========================================
// 可解释性输出: 综合评分 + 分项明细 + 推荐理由
#[derive(Debug, Clone, Serialize)]
pub struct VendorScoreView {
    pub vendor_id: String,
    pub vendor_name: String,
    pub score: f64,
    pub priority: RecommendationPriority,
    pub breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
}

// ==========================================
// PlanApi - 策划方案 API
// ==========================================

/// 策划方案API
///
/// 职责:
/// 1. 方案生成 (目录全量评分 → 推荐 + 预算 + 时间线)
/// 2. 单供应商评分查询 (含分项明细与理由, 便于调试与展示)
/// 3. 输入校验与错误转换
pub struct PlanApi {
    catalog: Arc<VendorCatalog>,
    synthesizer: PlanSynthesizer,
    scorer: VendorScorer,
    reasoning: ReasoningGenerator,
}

impl PlanApi {
    /// 创建PlanApi实例
    ///
    /// # 参数
    /// - catalog: 供应商目录 (只读)
    /// - registry: 活动模板注册表 (只读)
    pub fn new(catalog: Arc<VendorCatalog>, registry: Arc<TemplateRegistry>) -> Self {
        Self {
            synthesizer: PlanSynthesizer::new(catalog.clone(), registry),
            catalog,
            scorer: VendorScorer::new(),
            reasoning: ReasoningGenerator::new(),
        }
    }

    /// 使用内置目录与内置模板创建
    pub fn with_builtin_data() -> Self {
        Self::new(builtin_catalog(), builtin_registry())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成活动策划方案
    ///
    /// # 返回
    /// - Ok(EventPlan): 完整方案
    /// - Err(ApiError::InvalidInput): 预算数值非法
    pub fn generate_plan(&self, requirements: &EventRequirements) -> ApiResult<EventPlan> {
        Self::validate_requirements(requirements)?;

        info!(
            event_type = %requirements.event_type,
            budget = requirements.budget,
            "生成策划方案"
        );

        Ok(self.synthesizer.generate_plan(requirements))
    }

    /// 查询单个供应商的适配评分
    ///
    /// # 返回
    /// - Ok(VendorScoreView): 评分 + 分项明细 + 理由
    /// - Err(ApiError::NotFound): 供应商不存在
    pub fn score_vendor(
        &self,
        vendor_id: &str,
        requirements: &EventRequirements,
    ) -> ApiResult<VendorScoreView> {
        Self::validate_requirements(requirements)?;

        let vendor = self.catalog.find(vendor_id).ok_or_else(|| ApiError::NotFound {
            entity: "Vendor".to_string(),
            id: vendor_id.to_string(),
        })?;

        let breakdown = self.scorer.score_breakdown(vendor, requirements);
        let reasoning = self.reasoning.explain(vendor, requirements, breakdown.total);

        Ok(VendorScoreView {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            score: breakdown.total,
            priority: RecommendationPriority::from_score(breakdown.total),
            breakdown,
            reasoning,
        })
    }

    // ==========================================
    // 输入校验
    // ==========================================

    /// 校验需求记录
    ///
    /// 只拒绝数值非法的预算; 其余字段由引擎回退规则兜底
    fn validate_requirements(requirements: &EventRequirements) -> ApiResult<()> {
        if !requirements.budget.is_finite() {
            return Err(ApiError::InvalidInput(format!(
                "budget 必须为有限数值: {}",
                requirements.budget
            )));
        }

        if requirements.budget < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "budget 不得为负数: {}",
                requirements.budget
            )));
        }

        Ok(())
    }
}

impl Default for PlanApi {
    fn default() -> Self {
        Self::with_builtin_data()
    }
}
