use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 模型假设 (Daylit X 预期收益参数, 全部可覆盖)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub cost_of_capital_annual_pct: f64,     // 年化资金成本, 用于机会成本
    pub dso_reduction_relative_pct: f64,     // DSO 相对降幅
    pub bad_debt_reduction_relative_pct: f64, // 坏账相对降幅
    pub productivity_time_saved_pct: f64,    // A/R 工时节省比例
    pub hours_per_fte_per_year: f64,         // 每FTE年工时
    pub working_days_per_year: f64,          // 年营业天数
    pub percentage_of_time_on_invoices: f64, // FTE 处理发票的时间占比
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            cost_of_capital_annual_pct: 0.045,
            dso_reduction_relative_pct: 0.40,
            bad_debt_reduction_relative_pct: 0.40,
            productivity_time_saved_pct: 0.50,
            hours_per_fte_per_year: 2000.0,
            working_days_per_year: 365.0,
            percentage_of_time_on_invoices: 0.80,
        }
    }
}

/// 假设校验错误 (构造 RoiCalculator 时拒绝非法除数)
#[derive(Debug, Error, PartialEq)]
pub enum AssumptionsError {
    #[error("working_days_per_year must be positive, got {0}")]
    NonPositiveWorkingDays(f64),
    #[error("hours_per_fte_per_year must be positive, got {0}")]
    NonPositiveFteHours(f64),
}

impl Assumptions {
    /// 校验除数字段 (NaN 同样无法通过 > 0 判断)
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        if !(self.working_days_per_year > 0.0) {
            return Err(AssumptionsError::NonPositiveWorkingDays(
                self.working_days_per_year,
            ));
        }
        if !(self.hours_per_fte_per_year > 0.0) {
            return Err(AssumptionsError::NonPositiveFteHours(
                self.hours_per_fte_per_year,
            ));
        }
        Ok(())
    }
}
