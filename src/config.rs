use serde::{Deserialize, Serialize};

use crate::models::Assumptions;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub assumptions: Assumptions,
    pub output_json: bool, // 演示程序附加输出 JSON 结果
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assumptions: Assumptions::default(),
            output_json: false,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// 从环境变量加载配置, 未设置的字段取默认值
    pub fn from_env() -> Self {
        let d = Assumptions::default();
        Self {
            assumptions: Assumptions {
                cost_of_capital_annual_pct: env_f64(
                    "ROI_COST_OF_CAPITAL_ANNUAL_PCT",
                    d.cost_of_capital_annual_pct,
                ),
                dso_reduction_relative_pct: env_f64(
                    "ROI_DSO_REDUCTION_RELATIVE_PCT",
                    d.dso_reduction_relative_pct,
                ),
                bad_debt_reduction_relative_pct: env_f64(
                    "ROI_BAD_DEBT_REDUCTION_RELATIVE_PCT",
                    d.bad_debt_reduction_relative_pct,
                ),
                productivity_time_saved_pct: env_f64(
                    "ROI_PRODUCTIVITY_TIME_SAVED_PCT",
                    d.productivity_time_saved_pct,
                ),
                hours_per_fte_per_year: env_f64(
                    "ROI_HOURS_PER_FTE_PER_YEAR",
                    d.hours_per_fte_per_year,
                ),
                working_days_per_year: env_f64(
                    "ROI_WORKING_DAYS_PER_YEAR",
                    d.working_days_per_year,
                ),
                percentage_of_time_on_invoices: env_f64(
                    "ROI_PERCENTAGE_OF_TIME_ON_INVOICES",
                    d.percentage_of_time_on_invoices,
                ),
            },
            output_json: std::env::var("ROI_OUTPUT_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_default_assumptions() {
        let config = AppConfig::default();
        assert_eq!(config.assumptions, Assumptions::default());
        assert!(!config.output_json);
    }
}
