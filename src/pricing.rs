use serde::Serialize;

/// 定价层级行 (按 ARR 划分, [lower, upper) 半开区间)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierRow {
    pub name: &'static str,
    pub lower: f64,            // 含下界
    pub upper: f64,            // 不含上界, 末行为 +∞
    pub annual_price_usd: f64,
}

/// 层级与年费已确认:
/// - Small: ARR < $25,000,000          -> $12,000 / 年
/// - Middle market: $25M - $50M ARR    -> $60,000 / 年
/// - Enterprise: ARR >= $50,000,000    -> $100,000 / 年
pub const TIERS: [TierRow; 3] = [
    TierRow {
        name: "Small",
        lower: 0.0,
        upper: 25_000_000.0,
        annual_price_usd: 12_000.0,
    },
    TierRow {
        name: "Middle market",
        lower: 25_000_000.0,
        upper: 50_000_000.0,
        annual_price_usd: 60_000.0,
    },
    TierRow {
        name: "Enterprise",
        lower: 50_000_000.0,
        upper: f64::INFINITY,
        annual_price_usd: 100_000.0,
    },
];

/// 按 ARR 顺序扫描层级表, 返回 (层级名, 年费)
/// 边界值落入更高层级; 负数/NaN 兜底返回末行 Enterprise
pub fn resolve_tier(annual_revenue_arr: f64) -> (&'static str, f64) {
    for row in &TIERS {
        if row.lower <= annual_revenue_arr && annual_revenue_arr < row.upper {
            return (row.name, row.annual_price_usd);
        }
    }
    let last = &TIERS[TIERS.len() - 1];
    (last.name, last.annual_price_usd)
}
