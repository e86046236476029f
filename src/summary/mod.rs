//! The aggregation engine
//!
//! Converts the current record set into derived summary figures. Every
//! function here is a pure function of its inputs: summaries are recomputed
//! on demand and never stored or cached.

pub mod income;
pub mod insights;
pub mod spending;

pub use income::IncomeSummary;
pub use spending::{
    daily_average, days_left_in_month, month_bounds, prev_week_window, week_window, weekly_trend,
    CategoryShare, PeriodDelta, SpendingSummary, WeekBucket,
};
