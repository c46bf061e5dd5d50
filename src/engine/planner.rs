// ==========================================
// 活动策划推荐引擎 - 方案合成引擎
// ==========================================
// 职责: 协调评分引擎与理由引擎, 合成完整策划方案
// 输入: EventRequirements
// 输出: EventPlan (推荐列表 + 策划步骤 + 预算明细 + 时间线)
// 红线: 纯函数 (仅诊断日志), 不修改目录/模板/需求
// ==========================================

use crate::catalog::VendorCatalog;
use crate::config::phase_policy::phase_policy;
use crate::config::template_registry::{EventTemplate, TemplateRegistry};
use crate::domain::plan::{BudgetLine, EventPlan, PlanningStep, VendorRecommendation};
use crate::domain::requirements::EventRequirements;
use crate::domain::types::RecommendationPriority;
use crate::engine::reasoning::ReasoningGenerator;
use crate::engine::scorer::VendorScorer;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// 合成口径常量
// ==========================================

// 推荐列表上限
pub const MAX_RECOMMENDATIONS: usize = 8;

// 相关性硬下限: 评分 <= 30 的供应商不出现在推荐中
pub const MIN_RELEVANCE_SCORE: f64 = 30.0;

// 低预算阈值: 低于此值追加预算优化步骤
pub const LOW_BUDGET_THRESHOLD: f64 = 5000.0;

// 模板未列出类目的兜底分配比例 (名义上仍占10%)
pub const DEFAULT_CATEGORY_FRACTION: f64 = 0.1;

// ==========================================
// PlanSynthesizer - 方案合成引擎
// ==========================================
pub struct PlanSynthesizer {
    catalog: Arc<VendorCatalog>,
    registry: Arc<TemplateRegistry>,
    scorer: VendorScorer,
    reasoning: ReasoningGenerator,
}

impl PlanSynthesizer {
    /// 创建方案合成引擎 (默认评分权重)
    ///
    /// # 参数
    /// - catalog: 供应商目录 (只读)
    /// - registry: 活动模板注册表 (只读)
    pub fn new(catalog: Arc<VendorCatalog>, registry: Arc<TemplateRegistry>) -> Self {
        Self {
            catalog,
            registry,
            scorer: VendorScorer::new(),
            reasoning: ReasoningGenerator::new(),
        }
    }

    /// 使用自定义评分引擎创建
    pub fn with_scorer(
        catalog: Arc<VendorCatalog>,
        registry: Arc<TemplateRegistry>,
        scorer: VendorScorer,
    ) -> Self {
        Self {
            catalog,
            registry,
            scorer,
            reasoning: ReasoningGenerator::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 合成活动策划方案
    ///
    /// 流程:
    /// 1) 解析活动模板 (未知类型回退默认模板)
    /// 2) 对目录内每个供应商: 评分 + 理由 + 预估费用 + 优先级
    /// 3) 过滤评分 <= 30 的供应商
    /// 4) 按评分降序稳定排序 (同分保持目录顺序, 结果可复现)
    /// 5) 截取前 8 条
    /// 6) 按模板阶段展开策划步骤, 低预算时追加优化步骤
    /// 7) 按模板分配比例生成预算明细 (与推荐结果无关)
    /// 8) 综合评分 = 推荐评分均值 (空列表时为 0.0)
    #[instrument(skip(self, requirements), fields(
        event_type = %requirements.event_type,
        budget = requirements.budget,
        guest_count = requirements.guest_count,
    ))]
    pub fn generate_plan(&self, requirements: &EventRequirements) -> EventPlan {
        // ==========================================
        // 步骤1: 解析活动模板
        // ==========================================
        let template = self.registry.resolve(&requirements.event_type);
        debug!(template = %template.event_type, "模板解析完成");

        // ==========================================
        // 步骤2-5: 供应商推荐
        // ==========================================
        let recommendations = self.build_recommendations(template, requirements);

        // ==========================================
        // 步骤6: 策划步骤
        // ==========================================
        let planning_steps = self.build_planning_steps(template, requirements);

        // ==========================================
        // 步骤7: 预算明细
        // ==========================================
        let budget_breakdown = Self::build_budget_breakdown(template, requirements);

        // ==========================================
        // 步骤8: 综合评分 (空推荐列表时为 0.0, 不产出 NaN)
        // ==========================================
        let total_score = if recommendations.is_empty() {
            0.0
        } else {
            recommendations.iter().map(|r| r.score).sum::<f64>() / recommendations.len() as f64
        };

        info!(
            recommendations = recommendations.len(),
            steps = planning_steps.len(),
            total_score,
            "方案合成完成"
        );

        EventPlan {
            vendor_recommendations: recommendations,
            planning_steps,
            budget_breakdown,
            timeline: template.timeline_phases.clone(),
            total_score,
        }
    }

    // ==========================================
    // 供应商推荐
    // ==========================================

    /// 评分、过滤、排序、截断
    fn build_recommendations(
        &self,
        template: &EventTemplate,
        requirements: &EventRequirements,
    ) -> Vec<VendorRecommendation> {
        let mut recommendations: Vec<VendorRecommendation> = self
            .catalog
            .vendors()
            .iter()
            .map(|vendor| {
                let score = self.scorer.score(vendor, requirements);
                let reasoning = self.reasoning.explain(vendor, requirements, score);

                // 预估费用: 不超过类目名义预算, 也不超过供应商均价
                let fraction = template
                    .allocation_fraction(&vendor.category)
                    .unwrap_or(DEFAULT_CATEGORY_FRACTION);
                let category_budget = fraction * requirements.budget;
                let estimated_cost = category_budget.min(vendor.avg_price());

                VendorRecommendation {
                    vendor: vendor.clone(),
                    score,
                    reasoning,
                    estimated_cost,
                    priority: RecommendationPriority::from_score(score),
                }
            })
            .filter(|rec| rec.score > MIN_RELEVANCE_SCORE)
            .collect();

        // 稳定排序: 同分保持目录顺序
        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        debug!(surfaced = recommendations.len(), "供应商推荐生成完成");
        recommendations
    }

    // ==========================================
    // 策划步骤
    // ==========================================

    /// 按模板阶段展开任务, 阶段位置决定优先级与预估时长
    fn build_planning_steps(
        &self,
        template: &EventTemplate,
        requirements: &EventRequirements,
    ) -> Vec<PlanningStep> {
        let mut steps = Vec::new();

        for (phase_index, timeline_phase) in template.timeline_phases.iter().enumerate() {
            let policy = phase_policy(phase_index);

            for (task_index, task) in timeline_phase.tasks.iter().enumerate() {
                steps.push(PlanningStep {
                    id: format!("{}-{}", phase_index, task_index),
                    task: task.clone(),
                    timeline: timeline_phase.timeframe.clone(),
                    priority: policy.priority,
                    category: timeline_phase.phase.clone(),
                    estimated_duration: policy.estimated_duration.to_string(),
                });
            }
        }

        // 低预算追加步骤
        if requirements.budget < LOW_BUDGET_THRESHOLD {
            steps.push(PlanningStep {
                id: "budget-1".to_string(),
                task: "Consider DIY options for decorations to save costs".to_string(),
                timeline: "1-2 months before".to_string(),
                priority: crate::domain::types::StepPriority::Important,
                category: "Budget Optimization".to_string(),
                estimated_duration: "1 week".to_string(),
            });
        }

        steps
    }

    // ==========================================
    // 预算明细
    // ==========================================

    /// 按模板分配比例逐条生成, 与实际推荐的供应商无关
    fn build_budget_breakdown(
        template: &EventTemplate,
        requirements: &EventRequirements,
    ) -> Vec<BudgetLine> {
        template
            .budget_allocation
            .iter()
            .map(|entry| BudgetLine {
                category: entry.category.clone(),
                allocation: requirements.budget * entry.fraction,
                percentage: entry.fraction * 100.0,
            })
            .collect()
    }
}
