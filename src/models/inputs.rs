use serde::{Deserialize, Serialize};

/// 计算输入 (客户业务数据, 一次计算一份, 不可变)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub industry: String,         // 行业名称, 匹配基准表时展示对标信息
    pub annual_revenue: f64,      // 年度经常性收入 ARR (USD/年)
    pub ar_headcount: u32,        // 应收账款团队 FTE 人数
    pub current_dso_days: f64,    // 当前 DSO (天)
    pub monthly_invoices: u32,    // 每月发票量, 仅展示, 不参与公式
    pub fte_salary_base: f64,     // 每FTE基础年薪 (USD/年)
    pub bad_debt_pct: f64,        // 坏账占 A/R 余额比例, 预期 [0,1]
}
