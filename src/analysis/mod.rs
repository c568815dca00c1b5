//! Progress analysis: how well plans are being executed against the
//! expected-progress curve, per plan and in aggregate.
//!
//! Everything here is a pure function of its inputs plus an explicit `now`.

pub mod findings;
pub mod overall;
pub mod progress;

pub use findings::{MotivationLevel, OverallStatus, Recommendation, Strength, Weakness};
pub use overall::{analyze_overall, OverallAnalysis};
pub use progress::{analyze_plan, Analysis};
