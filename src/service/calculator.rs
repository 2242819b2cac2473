use crate::models::{Assumptions, AssumptionsError, RoiInputs, RoiResults};
use crate::pricing;

/// ROI 计算服务 (完全复刻定价模型的收益公式)
/// 纯函数组合: 层级解析 + 四项收益指标 + ROI 汇总, 无副作用
pub struct RoiCalculator {
    assumptions: Assumptions,
}

impl RoiCalculator {
    /// 构造时校验假设, 非法除数直接拒绝
    pub fn new(assumptions: Assumptions) -> Result<Self, AssumptionsError> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// 现金流改善: DSO 降幅释放的营运资金 (不乘资金成本)
    pub fn compute_cash_flow_improvement(&self, inputs: &RoiInputs) -> f64 {
        // 相对降幅换算为减少的天数
        let days_reduced = inputs.current_dso_days * self.assumptions.dso_reduction_relative_pct;
        let average_daily_revenue = inputs.annual_revenue / self.assumptions.working_days_per_year;
        let freed_cash_balance = average_daily_revenue * days_reduced;
        freed_cash_balance.max(0.0)
    }

    /// 人力节省: A/R 团队处理发票工时减少带来的年化人力成本节省
    pub fn compute_annualized_employee_savings(&self, inputs: &RoiInputs) -> f64 {
        let hourly_wage = inputs.fte_salary_base / self.assumptions.hours_per_fte_per_year;
        let time_spent_on_invoices =
            self.assumptions.hours_per_fte_per_year * self.assumptions.percentage_of_time_on_invoices;
        let savings = f64::from(inputs.ar_headcount)
            * time_spent_on_invoices
            * self.assumptions.productivity_time_saved_pct
            * hourly_wage;
        savings.max(0.0)
    }

    /// 生产力工时节省 (小时数, 独立于 4.4 的货币口径)
    pub fn compute_productivity_hours_saved(&self, inputs: &RoiInputs) -> f64 {
        let total_hours = f64::from(inputs.ar_headcount)
            * self.assumptions.hours_per_fte_per_year
            * self.assumptions.productivity_time_saved_pct
            * self.assumptions.percentage_of_time_on_invoices;
        total_hours.max(0.0)
    }

    /// 坏账节省: 基线坏账按当前 DSO 推算的 A/R 余额占比建模
    /// A/R ≈ annual_revenue × (current_dso_days / working_days_per_year)
    pub fn compute_bad_debt_savings(&self, inputs: &RoiInputs) -> f64 {
        let estimated_ar_balance = inputs.annual_revenue
            * (inputs.current_dso_days / self.assumptions.working_days_per_year);
        let baseline_bad_debt = estimated_ar_balance * inputs.bad_debt_pct;
        let savings = baseline_bad_debt * self.assumptions.bad_debt_reduction_relative_pct;
        savings.max(0.0)
    }

    /// 汇总计算: 自动按 ARR 定层级, 产出完整结果
    pub fn calculate_all(&self, inputs: &RoiInputs) -> RoiResults {
        // 1. 层级与年费
        let (tier, annual_price) = pricing::resolve_tier(inputs.annual_revenue);
        tracing::debug!("ARR {} 解析层级: {} (年费 {})", inputs.annual_revenue, tier, annual_price);

        // 2. 四项收益指标
        let cash_flow_improvement = self.compute_cash_flow_improvement(inputs);
        let employee_savings = self.compute_annualized_employee_savings(inputs);
        let productivity_hours_saved = self.compute_productivity_hours_saved(inputs);
        let bad_debt_savings = self.compute_bad_debt_savings(inputs);

        // 3. ROI 只计入已实现的成本/损失降低; 释放现金单独披露, 不进总收益
        let total_benefit = employee_savings + bad_debt_savings;
        let roi_pct = compute_roi_pct(total_benefit, annual_price);

        // 4. 机会成本: 不采用产品时每年放弃的收益价值
        let opportunity_cost = total_benefit * self.assumptions.cost_of_capital_annual_pct;

        tracing::debug!(
            "收益汇总: total_benefit={:.2}, roi_pct={:.1}",
            total_benefit,
            roi_pct
        );

        RoiResults {
            roi_pct,
            cash_flow_improvement_usd: cash_flow_improvement,
            annualized_employee_savings_usd: employee_savings,
            productivity_hours_saved,
            bad_debt_savings_usd: bad_debt_savings,
            opportunity_cost_usd: opportunity_cost,
            tier: tier.to_string(),
            annual_price_usd: annual_price,
        }
    }
}

/// ROI 百分比: ((benefit - cost) / cost) × 100
/// cost <= 0 且 benefit > 0 时返回 +∞, 否则 0 (规避除零)
pub fn compute_roi_pct(total_benefit_usd: f64, annual_price_usd: f64) -> f64 {
    if annual_price_usd <= 0.0 {
        return if total_benefit_usd > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
    }
    let roi_ratio = (total_benefit_usd - annual_price_usd) / annual_price_usd;
    roi_ratio * 100.0
}
