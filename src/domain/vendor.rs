// ==========================================
// 活动策划推荐引擎 - 供应商领域模型
// ==========================================
// 用途: 目录层写入, 引擎层只读
// 不变量 (由目录层在构造时校验):
// - price_range.min <= price_range.max
// - capacity.min <= capacity.max
// - 0 <= rating <= 5
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PriceRange - 价格区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64, // 最低报价
    pub max: f64, // 最高报价
}

impl PriceRange {
    /// 区间均价, 预算适配的比较基准
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

// ==========================================
// CapacityRange - 接待容量区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRange {
    pub min: u32, // 最小接待人数
    pub max: u32, // 最大接待人数
}

impl CapacityRange {
    /// 判断来宾人数是否落在标称容量内 (含边界)
    pub fn covers(&self, guest_count: u32) -> bool {
        guest_count >= self.min && guest_count <= self.max
    }
}

// ==========================================
// Vendor - 供应商主数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    // ===== 主键 =====
    pub id: String, // 供应商唯一标识

    // ===== 基础信息 =====
    pub name: String,     // 显示名称
    pub category: String, // 服务类目 (Catering/Venue/Photography/...)

    // ===== 匹配维度 =====
    pub specialties: Vec<String>,  // 擅长的活动类型标签
    pub price_range: PriceRange,   // 报价区间
    pub location: String,          // 所在地 ("City, Region")
    pub rating: f64,               // 评分 (0.0 - 5.0)
    pub capacity: CapacityRange,   // 接待容量区间

    // ===== 扩展字段 (当前评分不消费, 预留) =====
    #[serde(default)]
    pub features: Vec<String>, // 服务特性标签
}

impl Vendor {
    /// 报价区间均价
    pub fn avg_price(&self) -> f64 {
        self.price_range.average()
    }

    /// 判断是否声明擅长指定活动类型
    pub fn has_specialty(&self, event_type: &str) -> bool {
        self.specialties.iter().any(|s| s == event_type)
    }
}
