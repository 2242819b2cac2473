pub mod calculator;

pub use calculator::{compute_roi_pct, RoiCalculator};
