// ==========================================
// 活动策划推荐引擎 - 活动模板注册表
// ==========================================
// 职责: 按活动类型提供 {相关类目, 预算分配比例, 分阶段时间线}
// 约定: 未注册的活动类型回退到默认模板 (corporate), 不报错
// 约定: 分配比例按模板原样使用, 不做归一化
// ==========================================

use crate::config::ConfigError;
use crate::domain::plan::TimelinePhase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

// 默认回退模板的活动类型
pub const DEFAULT_EVENT_TYPE: &str = "corporate";

// ==========================================
// CategoryAllocation - 类目预算分配
// ==========================================
// 有序列表表示, 保证预算明细输出顺序确定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: String, // 服务类目
    pub fraction: f64,    // 分配比例 (模板原值, 各模板之和不要求恰为1)
}

// ==========================================
// EventTemplate - 活动模板
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub event_type: String,                      // 注册键
    pub categories: Vec<String>,                 // 相关服务类目 (有序)
    pub budget_allocation: Vec<CategoryAllocation>, // 类目预算分配 (有序)
    pub timeline_phases: Vec<TimelinePhase>,     // 分阶段时间线 (顺序有业务含义)
}

impl EventTemplate {
    /// 查询类目的分配比例
    ///
    /// # 返回
    /// - Some(fraction): 模板中列出的类目
    /// - None: 未列出 (调用方决定兜底比例)
    pub fn allocation_fraction(&self, category: &str) -> Option<f64> {
        self.budget_allocation
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.fraction)
    }

    /// 分配比例之和 (模板原值口径)
    pub fn fraction_sum(&self) -> f64 {
        self.budget_allocation.iter().map(|entry| entry.fraction).sum()
    }
}

// ==========================================
// TemplateRegistry - 模板注册表
// ==========================================
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<EventTemplate>,
    default_index: usize,
}

impl TemplateRegistry {
    /// 从模板列表构造注册表
    ///
    /// 校验:
    /// - 必须包含默认模板 (event_type = "corporate"), 回退规则依赖它
    /// - event_type 不得重复注册
    pub fn new(templates: Vec<EventTemplate>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.event_type.clone()) {
                return Err(ConfigError::DuplicateEventType(template.event_type.clone()));
            }
        }

        let default_index = templates
            .iter()
            .position(|t| t.event_type == DEFAULT_EVENT_TYPE)
            .ok_or_else(|| {
                ConfigError::MissingDefaultTemplate(DEFAULT_EVENT_TYPE.to_string())
            })?;

        Ok(Self {
            templates,
            default_index,
        })
    }

    /// 从 JSON 数组加载注册表 (外部数据边界)
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let templates: Vec<EventTemplate> = serde_json::from_str(raw)?;
        Self::new(templates)
    }

    /// 精确查找模板
    pub fn get(&self, event_type: &str) -> Option<&EventTemplate> {
        self.templates.iter().find(|t| t.event_type == event_type)
    }

    /// 解析活动类型对应的模板
    ///
    /// 未注册的活动类型静默回退到默认模板, 不是错误
    pub fn resolve(&self, event_type: &str) -> &EventTemplate {
        self.get(event_type)
            .unwrap_or(&self.templates[self.default_index])
    }

    /// 已注册的活动类型列表
    pub fn event_types(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.event_type.as_str()).collect()
    }
}

// ==========================================
// 内置模板数据
// ==========================================

static BUILTIN_REGISTRY: OnceLock<Arc<TemplateRegistry>> = OnceLock::new();

/// 内置模板注册表 (进程内单例, 首次访问时初始化)
pub fn builtin_registry() -> Arc<TemplateRegistry> {
    BUILTIN_REGISTRY
        .get_or_init(|| {
            // 内置数据包含默认模板且键唯一 (见单元测试)
            let templates = builtin_templates();
            let default_index = templates
                .iter()
                .position(|t| t.event_type == DEFAULT_EVENT_TYPE)
                .unwrap_or(0);
            Arc::new(TemplateRegistry {
                templates,
                default_index,
            })
        })
        .clone()
}

fn phase(name: &str, timeframe: &str, tasks: &[&str]) -> TimelinePhase {
    TimelinePhase {
        phase: name.to_string(),
        timeframe: timeframe.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

fn allocation(category: &str, fraction: f64) -> CategoryAllocation {
    CategoryAllocation {
        category: category.to_string(),
        fraction,
    }
}

/// 内置活动模板: wedding / corporate / birthday
fn builtin_templates() -> Vec<EventTemplate> {
    vec![
        EventTemplate {
            event_type: "wedding".to_string(),
            categories: vec![
                "Venue".to_string(),
                "Catering".to_string(),
                "Photography".to_string(),
                "Entertainment".to_string(),
                "Decorations".to_string(),
            ],
            budget_allocation: vec![
                allocation("Venue", 0.4),
                allocation("Catering", 0.3),
                allocation("Photography", 0.15),
                allocation("Entertainment", 0.1),
                allocation("Decorations", 0.05),
            ],
            timeline_phases: vec![
                phase(
                    "Planning Phase",
                    "6-12 months before",
                    &["Book venue", "Hire photographer", "Plan catering"],
                ),
                phase(
                    "Preparation Phase",
                    "3-6 months before",
                    &["Finalize decorations", "Book entertainment", "Confirm details"],
                ),
                phase(
                    "Final Phase",
                    "1 month before",
                    &["Final headcount", "Rehearsal", "Day-of coordination"],
                ),
            ],
        },
        EventTemplate {
            event_type: "corporate".to_string(),
            categories: vec![
                "Venue".to_string(),
                "Catering".to_string(),
                "Audio/Visual".to_string(),
                "Entertainment".to_string(),
            ],
            budget_allocation: vec![
                allocation("Venue", 0.3),
                allocation("Catering", 0.4),
                allocation("Audio/Visual", 0.2),
                allocation("Entertainment", 0.1),
            ],
            timeline_phases: vec![
                phase(
                    "Planning Phase",
                    "2-4 months before",
                    &["Secure venue", "Plan agenda", "Book AV equipment"],
                ),
                phase(
                    "Preparation Phase",
                    "1-2 months before",
                    &["Finalize catering", "Prepare materials", "Send invitations"],
                ),
                phase(
                    "Final Phase",
                    "1 week before",
                    &["Confirm attendees", "Setup rehearsal", "Brief team"],
                ),
            ],
        },
        EventTemplate {
            event_type: "birthday".to_string(),
            categories: vec![
                "Venue".to_string(),
                "Catering".to_string(),
                "Entertainment".to_string(),
                "Decorations".to_string(),
            ],
            budget_allocation: vec![
                allocation("Venue", 0.25),
                allocation("Catering", 0.35),
                allocation("Entertainment", 0.25),
                allocation("Decorations", 0.15),
            ],
            timeline_phases: vec![
                phase(
                    "Planning Phase",
                    "1-2 months before",
                    &["Choose theme", "Book venue", "Plan activities"],
                ),
                phase(
                    "Preparation Phase",
                    "2-4 weeks before",
                    &["Order decorations", "Plan catering", "Send invitations"],
                ),
                phase(
                    "Final Phase",
                    "1 week before",
                    &["Confirm details", "Prepare party favors", "Setup timeline"],
                ),
            ],
        },
    ]
}
