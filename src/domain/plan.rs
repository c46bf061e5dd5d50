// ==========================================
// 活动策划推荐引擎 - 策划方案领域模型
// ==========================================
// 红线: 方案是单次调用的派生快照, 不可反向污染目录/模板
// 生命周期: 每次调用全新生成, 无缓存, 无持久化
// ==========================================

use crate::domain::types::{RecommendationPriority, StepPriority};
use crate::domain::vendor::Vendor;
use serde::{Deserialize, Serialize};

// ==========================================
// VendorRecommendation - 供应商推荐
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecommendation {
    pub vendor: Vendor,                       // 目录条目快照
    pub score: f64,                           // 综合评分 (0 - 100)
    pub reasoning: Vec<String>,               // 推荐理由 (有序, 可为空)
    pub estimated_cost: f64,                  // 预估费用 (>= 0)
    pub priority: RecommendationPriority,     // 分数派生的优先级
}

// ==========================================
// PlanningStep - 策划步骤
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningStep {
    pub id: String,                 // 方案内唯一标识 ("{阶段序号}-{任务序号}")
    pub task: String,               // 任务描述
    pub timeline: String,           // 时间窗口标签 (来自阶段 timeframe)
    pub priority: StepPriority,     // 阶段位置派生的优先级
    pub category: String,           // 来源阶段名称
    pub estimated_duration: String, // 预估时长 (阶段策略表)
}

// ==========================================
// BudgetLine - 预算分配明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String, // 服务类目
    pub allocation: f64,  // 绝对金额 = 总预算 × 分配比例
    pub percentage: f64,  // 分配比例 × 100
}

// ==========================================
// TimelinePhase - 时间线阶段
// ==========================================
// 模板定义, 方案中原样透出; 阶段顺序有业务含义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: String,      // 阶段名称
    pub timeframe: String,  // 时间窗口标签
    pub tasks: Vec<String>, // 有序任务列表
}

// ==========================================
// EventPlan - 活动策划方案 (顶层输出)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlan {
    pub vendor_recommendations: Vec<VendorRecommendation>, // 按评分降序
    pub planning_steps: Vec<PlanningStep>,                 // 按阶段序、任务序
    pub budget_breakdown: Vec<BudgetLine>,                 // 每模板类目一条
    pub timeline: Vec<TimelinePhase>,                      // 模板阶段原样透出
    pub total_score: f64,                                  // 推荐评分均值 (空列表时为 0.0)
}
