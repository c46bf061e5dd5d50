// ==========================================
// 活动策划推荐引擎 - 地区口径
// ==========================================
// 约定: 位置字符串格式为 "City, Region"
// 地区令牌 = 最后一个 ", " 分隔符之后的子串
// 无分隔符时退化为整串比较, 永不失败
// ==========================================

/// 提取地区令牌
///
/// # 参数
/// - `location`: "City, Region" 格式的位置字符串
///
/// # 返回
/// 最后一个 ", " 之后的子串; 无分隔符时返回整串
pub fn region_token(location: &str) -> &str {
    match location.rsplit_once(", ") {
        Some((_, region)) => region,
        None => location,
    }
}

/// 判断两个位置是否属于同一地区
///
/// 双边统一按地区令牌比较, 任一侧格式异常时退化为整串
pub fn same_region(a: &str, b: &str) -> bool {
    region_token(a) == region_token(b)
}
