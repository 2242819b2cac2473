use crate::benchmark::{self, DsoPosition};
use crate::models::{RoiInputs, RoiResults};

/// 千分位分组 (仅整数部分)
fn group_digits(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 货币格式: 取整到美元, 符号在 $ 之外, 如 -$1,234
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_digits(value.abs().round() as u64))
}

/// 数值格式: 取整 + 千分位
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_digits(value.abs().round() as u64))
}

/// 百分比格式: 一位小数 + 千分位; 非有限值按 f64 默认显示 (如 inf%)
pub fn format_pct(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let scaled = (value.abs() * 10.0).round() as u64;
    format!("{}{}.{}%", sign, group_digits(scaled / 10), scaled % 10)
}

/// 控制台摘要 (演示用, 不属于核心契约)
pub fn render_summary(inputs: &RoiInputs, results: &RoiResults) -> String {
    let mut out = String::new();
    out.push_str("Daylit X ROI Summary\n");
    out.push_str("---------------------\n");
    out.push_str(&format!("Industry: {}\n", inputs.industry));

    // 行业收录时附带 DSO 对标行
    if let Some(cmp) = benchmark::compare_to_benchmark(&inputs.industry, inputs.current_dso_days) {
        let line = match cmp.position {
            DsoPosition::Above => format!(
                "Your DSO ({:.0} days) is {:.0} days ABOVE industry benchmark ({} days)\n",
                inputs.current_dso_days, cmp.delta_days, cmp.benchmark_dso_days
            ),
            DsoPosition::Below => format!(
                "Your DSO ({:.0} days) is {:.0} days BELOW industry benchmark ({} days)\n",
                inputs.current_dso_days,
                cmp.delta_days.abs(),
                cmp.benchmark_dso_days
            ),
            DsoPosition::AtBenchmark => format!(
                "Your DSO ({:.0} days) matches industry benchmark ({} days)\n",
                inputs.current_dso_days, cmp.benchmark_dso_days
            ),
        };
        out.push_str(&line);
    }
    out.push('\n');

    out.push_str(&format!("Tier: {}\n", results.tier));
    out.push_str(&format!(
        "Price (annual): {}\n",
        format_currency(results.annual_price_usd)
    ));
    out.push_str(&format!("ROI: {}\n", format_pct(results.roi_pct)));
    out.push_str(&format!(
        "Cash flow improvement (freed cash): {}\n",
        format_currency(results.cash_flow_improvement_usd)
    ));
    out.push_str(&format!(
        "Employee savings (annualized): {}\n",
        format_currency(results.annualized_employee_savings_usd)
    ));
    out.push_str(&format!(
        "Productivity hours saved (annual): {} hours\n",
        format_number(results.productivity_hours_saved)
    ));
    out.push_str(&format!(
        "Bad debt savings (annual): {}\n",
        format_currency(results.bad_debt_savings_usd)
    ));
    out.push_str(&format!(
        "Opportunity cost (annual): {}\n",
        format_currency(results.opportunity_cost_usd)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assumptions;
    use crate::service::RoiCalculator;

    #[test]
    fn currency_grouping_and_sign() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-1_234.4), "-$1,234");
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number(2_400.0), "2,400");
        assert_eq!(format_number(85_479.45), "85,479");
    }

    #[test]
    fn pct_one_decimal_with_grouping() {
        assert_eq!(format_pct(735.616_4), "735.6%");
        assert_eq!(format_pct(1_234.56), "1,234.6%");
        assert_eq!(format_pct(-12.34), "-12.3%");
        assert_eq!(format_pct(f64::INFINITY), "inf%");
    }

    #[test]
    fn summary_includes_benchmark_line() {
        let inputs = RoiInputs {
            industry: "Hospitals/Healthcare Facilities".to_string(),
            annual_revenue: 1_200_000.0,
            ar_headcount: 3,
            current_dso_days: 65.0,
            monthly_invoices: 5000,
            fte_salary_base: 80_000.0,
            bad_debt_pct: 0.05,
        };
        let calc = RoiCalculator::new(Assumptions::default()).unwrap();
        let summary = render_summary(&inputs, &calc.calculate_all(&inputs));
        assert!(summary
            .contains("Your DSO (65 days) is 12 days ABOVE industry benchmark (53 days)"));
        assert!(summary.contains("Tier: Small"));
        assert!(summary.contains("Price (annual): $12,000"));
        assert!(summary.contains("Employee savings (annualized): $96,000"));
        assert!(summary.contains("Productivity hours saved (annual): 2,400 hours"));
    }

    #[test]
    fn summary_skips_benchmark_line_for_unknown_industry() {
        let inputs = RoiInputs {
            industry: "Nonexistent".to_string(),
            annual_revenue: 1_200_000.0,
            ar_headcount: 3,
            current_dso_days: 65.0,
            monthly_invoices: 5000,
            fte_salary_base: 80_000.0,
            bad_debt_pct: 0.05,
        };
        let calc = RoiCalculator::new(Assumptions::default()).unwrap();
        let summary = render_summary(&inputs, &calc.calculate_all(&inputs));
        assert!(!summary.contains("industry benchmark"));
    }
}
