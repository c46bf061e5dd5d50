// ==========================================
// 活动策划推荐引擎 - 活动需求模型
// ==========================================
// 用途: 调用方构造, 引擎单次调用内只读
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// EventRequirements - 活动需求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequirements {
    pub event_type: String, // 活动类型 (wedding/corporate/birthday/...), 未知类型回退默认模板
    pub budget: f64,        // 活动总预算 (>= 0, 0 为合法值)
    pub location: String,   // 活动地点 ("City, Region")
    pub guest_count: u32,   // 来宾人数

    // ===== 可选字段 =====
    #[serde(default)]
    pub date: Option<NaiveDate>, // 活动日期 (仅信息性, 不参与评分)

    #[serde(default)]
    pub preferences: Vec<String>, // 偏好标签 (透传字段, 当前评分不消费, 预留)
}

impl EventRequirements {
    /// 构造最小需求记录, 可选字段留空
    pub fn new(event_type: &str, budget: f64, location: &str, guest_count: u32) -> Self {
        Self {
            event_type: event_type.to_string(),
            budget,
            location: location.to_string(),
            guest_count,
            date: None,
            preferences: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_optional_fields_empty() {
        let req = EventRequirements::new("wedding", 20000.0, "New York, NY", 150);
        assert_eq!(req.event_type, "wedding");
        assert_eq!(req.guest_count, 150);
        assert!(req.date.is_none());
        assert!(req.preferences.is_empty());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        // 调用方 JSON 可省略 date / preferences
        let raw = r#"{"event_type":"corporate","budget":0.0,"location":"Texas, TX","guest_count":10}"#;
        let req: EventRequirements = serde_json::from_str(raw).unwrap();
        assert_eq!(req.budget, 0.0);
        assert!(req.preferences.is_empty());
    }
}
