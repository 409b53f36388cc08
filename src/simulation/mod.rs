pub mod monte_carlo;
pub mod types;

pub use monte_carlo::{expected_goals, simulate, simulate_seeded, simulate_with_rng};
pub use types::PredictionResult;
