//! Reporting domain logic
//!
//! - [`window`]: date-filter keywords and half-open report windows
//! - [`bucket`]: dense calendar series with zero-filled gaps
//!
//! The SQL aggregation itself lives in `db::repository::report`; these
//! modules are pure and independently testable.

pub mod bucket;
pub mod window;

pub use bucket::{Bucket, dense_daily, dense_monthly};
pub use window::{DateFilter, DateWindow, month_window, report_months};
