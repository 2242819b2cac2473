use daylit_roi_rust::{benchmark, report, AppConfig, RoiCalculator, RoiInputs};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置 (环境变量覆盖假设)
    let config = AppConfig::from_env();
    info!("Starting ROI demo with config: {:?}", config);

    let calculator = RoiCalculator::new(config.assumptions)?;

    // 展示已收录基准的行业
    println!("Available industries with benchmark data:");
    for industry in benchmark::list_supported_industries() {
        if let Some(days) = benchmark::lookup_industry_benchmark(industry) {
            println!("  - {}: {} days DSO", industry, days);
        }
    }
    println!();

    // 演示样例 — 选用有基准数据的行业
    let sample_inputs = RoiInputs {
        industry: "Hospitals/Healthcare Facilities".to_string(),
        annual_revenue: 1_200_000.0,
        ar_headcount: 3,
        current_dso_days: 65.0,
        monthly_invoices: 5000,
        fte_salary_base: 80_000.0,
        bad_debt_pct: 0.05,
    };

    let results = calculator.calculate_all(&sample_inputs);
    info!(
        "计算完成: tier={}, roi_pct={:.1}",
        results.tier, results.roi_pct
    );

    println!(
        "Generated at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    print!("{}", report::render_summary(&sample_inputs, &results));

    if config.output_json {
        println!();
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
