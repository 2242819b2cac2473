use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 行业基准 (来源: Damodaran, NYU Stern, Jan 2025)
/// https://pages.stern.nyu.edu/~adamodar/New_Home_Page/datafile/wcdata.html
/// DSO = Acc Rec/Sales × 365
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub acc_rec_to_sales_pct: f64,
    pub benchmark_dso_days: u32,
}

impl IndustryBenchmark {
    fn from_ratio(acc_rec_to_sales_pct: f64) -> Self {
        Self {
            acc_rec_to_sales_pct,
            benchmark_dso_days: (acc_rec_to_sales_pct * 365.0).round() as u32,
        }
    }
}

/// 行业基准表 (保序, 只读, 进程内初始化一次)
static INDUSTRY_DATA: Lazy<IndexMap<&'static str, IndustryBenchmark>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert("Retail Distributors", IndustryBenchmark::from_ratio(0.1216)); // 44 天
    m.insert("Chemical (Specialty)", IndustryBenchmark::from_ratio(0.1764)); // 64 天
    m.insert(
        "Hospitals/Healthcare Facilities",
        IndustryBenchmark::from_ratio(0.1447), // 53 天
    );
    m.insert(
        "Business & Consumer Services",
        IndustryBenchmark::from_ratio(0.1829), // 67 天
    );
    m
});

/// 查询行业基准 DSO (天); 未收录的行业返回 None, 属正常缺失而非错误
pub fn lookup_industry_benchmark(industry: &str) -> Option<u32> {
    INDUSTRY_DATA.get(industry).map(|b| b.benchmark_dso_days)
}

/// 查询完整基准条目 (含 AR/Sales 比率)
pub fn get_industry_benchmark(industry: &str) -> Option<&'static IndustryBenchmark> {
    INDUSTRY_DATA.get(industry)
}

/// 返回已收录基准数据的行业列表 (表内顺序)
pub fn list_supported_industries() -> Vec<&'static str> {
    INDUSTRY_DATA.keys().copied().collect()
}

/// 客户 DSO 相对行业基准的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DsoPosition {
    Above,
    Below,
    AtBenchmark,
}

/// DSO 对标结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsoComparison {
    pub benchmark_dso_days: u32,
    pub delta_days: f64, // 客户 DSO - 基准, 正值表示高于基准
    pub position: DsoPosition,
}

/// 将客户 DSO 与行业基准对比; 行业未收录时返回 None
pub fn compare_to_benchmark(industry: &str, current_dso_days: f64) -> Option<DsoComparison> {
    let benchmark_dso_days = lookup_industry_benchmark(industry)?;
    let delta_days = current_dso_days - f64::from(benchmark_dso_days);
    let position = if delta_days > 0.0 {
        DsoPosition::Above
    } else if delta_days < 0.0 {
        DsoPosition::Below
    } else {
        DsoPosition::AtBenchmark
    };
    Some(DsoComparison {
        benchmark_dso_days,
        delta_days,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_industry_lookup() {
        assert_eq!(
            lookup_industry_benchmark("Hospitals/Healthcare Facilities"),
            Some(53)
        );
        assert_eq!(lookup_industry_benchmark("Retail Distributors"), Some(44));
        assert_eq!(lookup_industry_benchmark("Chemical (Specialty)"), Some(64));
        assert_eq!(
            lookup_industry_benchmark("Business & Consumer Services"),
            Some(67)
        );
    }

    #[test]
    fn unknown_industry_is_absent() {
        assert_eq!(lookup_industry_benchmark("Nonexistent"), None);
    }

    #[test]
    fn listing_preserves_table_order() {
        assert_eq!(
            list_supported_industries(),
            vec![
                "Retail Distributors",
                "Chemical (Specialty)",
                "Hospitals/Healthcare Facilities",
                "Business & Consumer Services",
            ]
        );
    }

    #[test]
    fn benchmark_days_derive_from_ratio() {
        for industry in list_supported_industries() {
            let b = get_industry_benchmark(industry).unwrap();
            assert_eq!(
                b.benchmark_dso_days,
                (b.acc_rec_to_sales_pct * 365.0).round() as u32
            );
        }
    }

    #[test]
    fn dso_comparison_positions() {
        let above = compare_to_benchmark("Hospitals/Healthcare Facilities", 65.0).unwrap();
        assert_eq!(above.position, DsoPosition::Above);
        assert_eq!(above.benchmark_dso_days, 53);
        assert!((above.delta_days - 12.0).abs() < 1e-9);

        let below = compare_to_benchmark("Hospitals/Healthcare Facilities", 40.0).unwrap();
        assert_eq!(below.position, DsoPosition::Below);

        let at = compare_to_benchmark("Hospitals/Healthcare Facilities", 53.0).unwrap();
        assert_eq!(at.position, DsoPosition::AtBenchmark);

        assert_eq!(compare_to_benchmark("Nonexistent", 65.0), None);
    }
}
