pub mod comparison;
pub mod scan_filter;
pub mod schedule_calculator;
pub mod statistics;

pub use comparison::{
    ComparisonReport, ComparisonStatus, ScanComparator, TypeComparison, VulnerabilityDiff,
};
pub use scan_filter::{ScanFilter, ScanQuery, SortKey, SortOrder};
pub use schedule_calculator::ScheduleCalculator;
pub use statistics::{DailyBucket, DashboardStats, RealtimeStats, ScanStatistics, ScanTimeline};
