use serde::{Deserialize, Serialize};

/// 计算结果 (一份 Inputs×Assumptions 产出一份, 构造后不再修改)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResults {
    pub roi_pct: f64,                          // 百分比, 150.0 即 150%
    pub cash_flow_improvement_usd: f64,        // 释放的营运资金, 不计入 ROI
    pub annualized_employee_savings_usd: f64,
    pub productivity_hours_saved: f64,         // 小时数, 非货币
    pub bad_debt_savings_usd: f64,
    pub opportunity_cost_usd: f64,             // 不采用产品时每年放弃的收益价值
    pub tier: String,
    pub annual_price_usd: f64,
}
