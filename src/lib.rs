pub mod benchmark;
pub mod config;
pub mod models;
pub mod pricing;
pub mod report;
pub mod service;

pub use config::AppConfig;
pub use models::{Assumptions, AssumptionsError, RoiInputs, RoiResults};
pub use service::RoiCalculator;
