// ==========================================
// 活动策划推荐引擎 - 内置供应商目录
// ==========================================
// 用途: 进程级只读静态数据, 启动后不再变更
// 数据口径: 演示用固定供应商集合
// ==========================================

use super::VendorCatalog;
use crate::domain::vendor::{CapacityRange, PriceRange, Vendor};
use std::sync::{Arc, OnceLock};

static BUILTIN_CATALOG: OnceLock<Arc<VendorCatalog>> = OnceLock::new();

/// 内置供应商目录 (进程内单例, 首次访问时初始化)
pub fn builtin_catalog() -> Arc<VendorCatalog> {
    BUILTIN_CATALOG
        .get_or_init(|| {
            // 内置数据按构造保证不变量成立 (见单元测试)
            Arc::new(VendorCatalog {
                vendors: builtin_vendors(),
            })
        })
        .clone()
}

/// 内置供应商数据
fn builtin_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "1".to_string(),
            name: "Elite Catering Co.".to_string(),
            category: "Catering".to_string(),
            specialties: vec![
                "corporate".to_string(),
                "wedding".to_string(),
                "formal".to_string(),
            ],
            price_range: PriceRange { min: 25.0, max: 150.0 },
            location: "New York, NY".to_string(),
            rating: 4.8,
            capacity: CapacityRange { min: 50, max: 500 },
            features: vec![
                "dietary-restrictions".to_string(),
                "premium-service".to_string(),
                "international-cuisine".to_string(),
            ],
        },
        Vendor {
            id: "2".to_string(),
            name: "Sound & Light Pro".to_string(),
            category: "Audio/Visual".to_string(),
            specialties: vec![
                "concert".to_string(),
                "corporate".to_string(),
                "wedding".to_string(),
            ],
            price_range: PriceRange { min: 500.0, max: 5000.0 },
            location: "New York, NY".to_string(),
            rating: 4.6,
            capacity: CapacityRange { min: 20, max: 1000 },
            features: vec![
                "live-streaming".to_string(),
                "LED-walls".to_string(),
                "wireless-mics".to_string(),
            ],
        },
        Vendor {
            id: "3".to_string(),
            name: "Bloom & Blossom".to_string(),
            category: "Decorations".to_string(),
            specialties: vec![
                "wedding".to_string(),
                "birthday".to_string(),
                "corporate".to_string(),
            ],
            price_range: PriceRange { min: 200.0, max: 3000.0 },
            location: "California, CA".to_string(),
            rating: 4.7,
            capacity: CapacityRange { min: 10, max: 300 },
            features: vec![
                "seasonal-flowers".to_string(),
                "custom-arrangements".to_string(),
                "eco-friendly".to_string(),
            ],
        },
        Vendor {
            id: "4".to_string(),
            name: "Metro Event Spaces".to_string(),
            category: "Venue".to_string(),
            specialties: vec![
                "corporate".to_string(),
                "conference".to_string(),
                "gala".to_string(),
            ],
            price_range: PriceRange { min: 1000.0, max: 8000.0 },
            location: "New York, NY".to_string(),
            rating: 4.5,
            capacity: CapacityRange { min: 100, max: 800 },
            features: vec![
                "parking".to_string(),
                "AV-equipped".to_string(),
                "catering-kitchen".to_string(),
            ],
        },
        Vendor {
            id: "5".to_string(),
            name: "Capture Moments".to_string(),
            category: "Photography".to_string(),
            specialties: vec![
                "wedding".to_string(),
                "corporate".to_string(),
                "portrait".to_string(),
            ],
            price_range: PriceRange { min: 800.0, max: 4000.0 },
            location: "California, CA".to_string(),
            rating: 4.9,
            capacity: CapacityRange { min: 1, max: 200 },
            features: vec![
                "drone-photography".to_string(),
                "same-day-editing".to_string(),
                "album-printing".to_string(),
            ],
        },
        Vendor {
            id: "6".to_string(),
            name: "Smooth Moves DJ".to_string(),
            category: "Entertainment".to_string(),
            specialties: vec![
                "wedding".to_string(),
                "birthday".to_string(),
                "corporate".to_string(),
            ],
            price_range: PriceRange { min: 300.0, max: 1500.0 },
            location: "Texas, TX".to_string(),
            rating: 4.4,
            capacity: CapacityRange { min: 20, max: 400 },
            features: vec![
                "karaoke".to_string(),
                "lighting".to_string(),
                "MC-services".to_string(),
            ],
        },
    ]
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_data_satisfies_invariants() {
        // 内置数据必须通过与外部数据相同的校验
        let catalog = VendorCatalog::new(builtin_vendors()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_builtin_catalog_is_shared() {
        let a = builtin_catalog();
        let b = builtin_catalog();
        assert!(Arc::ptr_eq(&a, &b), "内置目录应为进程内单例");
    }

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = builtin_catalog();
        let elite = catalog.find("1").unwrap();
        assert_eq!(elite.name, "Elite Catering Co.");
        assert_eq!(elite.category, "Catering");
        assert!((elite.avg_price() - 87.5).abs() < f64::EPSILON);
    }
}
