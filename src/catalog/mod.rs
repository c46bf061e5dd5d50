// ==========================================
// 活动策划推荐引擎 - 供应商目录
// ==========================================
// 职责: 持有不可变的供应商集合, 构造时校验不变量
// 红线: 初始化后只读, 引擎层不得修改
// ==========================================

pub mod builtin;

pub use builtin::builtin_catalog;

use crate::domain::vendor::Vendor;
use std::collections::HashSet;
use thiserror::Error;

// ==========================================
// CatalogError - 目录层错误类型
// ==========================================

/// 目录层错误类型
///
/// 所有错误信息必须包含显式原因 (可解释性)
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 数据解析错误 =====
    #[error("目录数据解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 数据质量错误 =====
    #[error("供应商数据违反不变量 (vendor_id={vendor_id}): {reason}")]
    InvariantViolation { vendor_id: String, reason: String },

    #[error("供应商ID重复: {0}")]
    DuplicateVendorId(String),
}

// ==========================================
// VendorCatalog - 供应商目录
// ==========================================
#[derive(Debug, Clone)]
pub struct VendorCatalog {
    vendors: Vec<Vendor>,
}

impl VendorCatalog {
    /// 从供应商列表构造目录
    ///
    /// 构造时逐条校验领域不变量:
    /// - price_range.min <= price_range.max
    /// - capacity.min <= capacity.max
    /// - 0 <= rating <= 5
    /// - id 全局唯一
    ///
    /// # 返回
    /// - Ok(VendorCatalog): 全部校验通过
    /// - Err(CatalogError): 首个违规条目的原因
    pub fn new(vendors: Vec<Vendor>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();

        for vendor in &vendors {
            validate_vendor(vendor)?;

            if !seen_ids.insert(vendor.id.clone()) {
                return Err(CatalogError::DuplicateVendorId(vendor.id.clone()));
            }
        }

        Ok(Self { vendors })
    }

    /// 从 JSON 数组加载目录 (外部数据边界)
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let vendors: Vec<Vendor> = serde_json::from_str(raw)?;
        Self::new(vendors)
    }

    /// 目录内全部供应商 (目录顺序即稳定排序的兜底顺序)
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// 按 ID 查找供应商
    pub fn find(&self, vendor_id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == vendor_id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

/// 校验单个供应商的领域不变量
fn validate_vendor(vendor: &Vendor) -> Result<(), CatalogError> {
    if !(vendor.price_range.min.is_finite() && vendor.price_range.max.is_finite()) {
        return Err(CatalogError::InvariantViolation {
            vendor_id: vendor.id.clone(),
            reason: format!(
                "price_range 必须为有限数值: min={}, max={}",
                vendor.price_range.min, vendor.price_range.max
            ),
        });
    }

    if vendor.price_range.min > vendor.price_range.max {
        return Err(CatalogError::InvariantViolation {
            vendor_id: vendor.id.clone(),
            reason: format!(
                "price_range.min ({}) > price_range.max ({})",
                vendor.price_range.min, vendor.price_range.max
            ),
        });
    }

    if vendor.capacity.min > vendor.capacity.max {
        return Err(CatalogError::InvariantViolation {
            vendor_id: vendor.id.clone(),
            reason: format!(
                "capacity.min ({}) > capacity.max ({})",
                vendor.capacity.min, vendor.capacity.max
            ),
        });
    }

    if !vendor.rating.is_finite() || vendor.rating < 0.0 || vendor.rating > 5.0 {
        return Err(CatalogError::InvariantViolation {
            vendor_id: vendor.id.clone(),
            reason: format!("rating ({}) 超出 [0, 5] 区间", vendor.rating),
        });
    }

    Ok(())
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::{CapacityRange, PriceRange};

    fn base_vendor(id: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {}", id),
            category: "Catering".to_string(),
            specialties: vec!["wedding".to_string()],
            price_range: PriceRange { min: 100.0, max: 200.0 },
            location: "New York, NY".to_string(),
            rating: 4.0,
            capacity: CapacityRange { min: 10, max: 100 },
            features: vec![],
        }
    }

    #[test]
    fn test_valid_catalog_construction() {
        let catalog = VendorCatalog::new(vec![base_vendor("V1"), base_vendor("V2")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("V1").is_some());
        assert!(catalog.find("V3").is_none());
    }

    #[test]
    fn test_rejects_inverted_price_range() {
        let mut vendor = base_vendor("V1");
        vendor.price_range = PriceRange { min: 300.0, max: 200.0 };

        let err = VendorCatalog::new(vec![vendor]).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvariantViolation { ref vendor_id, .. } if vendor_id == "V1"),
            "应报告价格区间不变量违规: {err}"
        );
    }

    #[test]
    fn test_rejects_inverted_capacity_range() {
        let mut vendor = base_vendor("V1");
        vendor.capacity = CapacityRange { min: 500, max: 100 };

        assert!(VendorCatalog::new(vec![vendor]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let mut vendor = base_vendor("V1");
        vendor.rating = 5.1;
        assert!(VendorCatalog::new(vec![vendor]).is_err());

        let mut vendor = base_vendor("V2");
        vendor.rating = -0.1;
        assert!(VendorCatalog::new(vec![vendor]).is_err());

        let mut vendor = base_vendor("V3");
        vendor.rating = f64::NAN;
        assert!(VendorCatalog::new(vec![vendor]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = VendorCatalog::new(vec![base_vendor("V1"), base_vendor("V1")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateVendorId(ref id) if id == "V1"));
    }

    #[test]
    fn test_from_json() {
        let raw = r#"[
            {
                "id": "J1",
                "name": "Json Vendor",
                "category": "Venue",
                "specialties": ["corporate"],
                "price_range": {"min": 1000.0, "max": 5000.0},
                "location": "Austin, TX",
                "rating": 4.2,
                "capacity": {"min": 50, "max": 300}
            }
        ]"#;

        let catalog = VendorCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("J1").unwrap().category, "Venue");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            VendorCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
