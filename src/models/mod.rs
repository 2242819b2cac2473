pub mod assumptions;
pub mod inputs;
pub mod result;

pub use assumptions::{Assumptions, AssumptionsError};
pub use inputs::RoiInputs;
pub use result::RoiResults;
