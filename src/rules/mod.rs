//! Business rules for the Employee Rules Engine.
//!
//! Pure functions for matricule generation, starting salary calculation and
//! commercial performance scoring. Each returns its result together with an
//! audit step; none of them touch storage.

mod matricule;
mod performance;
mod salary;

pub use matricule::{MatriculeResult, next_matricule};
pub use performance::{
    ABOVE_TARGET_CEILING, AverageAdjustmentResult, BELOW_TARGET_FLOOR, BandScoreResult,
    ON_TARGET_CEILING, ON_TARGET_FLOOR, adjust_to_average, determine_band, score_for_band,
    score_revenue,
};
pub use salary::{SalaryResult, calculate_salary};
