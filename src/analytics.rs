//! Analytics View
//!
//! Five panels fetched together. Each panel keeps its own result so one
//! failing endpoint only blanks its own panel.

use crate::api::{ApiError, ApiResult};
use crate::model::{ChartSummary, PlaylistInfo, Progress, Streak, WatchTime};

/// Banner shown when any panel failed
pub const PARTIAL_FAILURE_MESSAGE: &str = "Failed to load analytics data.";

/// One result per analytics panel
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsBundle {
    pub info: ApiResult<PlaylistInfo>,
    pub progress: ApiResult<Progress>,
    pub watch_time: ApiResult<WatchTime>,
    pub streak: ApiResult<Streak>,
    pub chart: ApiResult<ChartSummary>,
}

impl AnalyticsBundle {
    fn errors(&self) -> [Option<&ApiError>; 5] {
        [
            self.info.as_ref().err(),
            self.progress.as_ref().err(),
            self.watch_time.as_ref().err(),
            self.streak.as_ref().err(),
            self.chart.as_ref().err(),
        ]
    }

    pub fn has_failures(&self) -> bool {
        self.errors().iter().any(Option::is_some)
    }

    /// Single banner for the whole page, if anything failed
    pub fn banner(&self) -> Option<&'static str> {
        if self.has_failures() {
            Some(PARTIAL_FAILURE_MESSAGE)
        } else {
            None
        }
    }

    pub fn failed_panels(&self) -> Vec<&'static str> {
        const NAMES: [&str; 5] = ["playlist", "progress", "watch time", "streak", "chart"];
        NAMES
            .iter()
            .zip(self.errors())
            .filter(|(_, e)| e.is_some())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Pie slices, when the chart panel loaded
    pub fn pie(&self) -> Option<PieSlices> {
        self.chart.as_ref().ok().map(PieSlices::from)
    }
}

/// Completed vs remaining videos for the pie chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieSlices {
    pub completed: u32,
    pub remaining: u32,
}

impl PieSlices {
    pub fn total(&self) -> u32 {
        self.completed + self.remaining
    }

    /// Share of the completed slice in degrees, for a conic gradient
    pub fn completed_degrees(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.completed) * 360.0 / f64::from(total),
        }
    }
}

impl From<&ChartSummary> for PieSlices {
    fn from(chart: &ChartSummary) -> Self {
        Self {
            completed: chart.completed_videos,
            remaining: chart.total_videos.saturating_sub(chart.completed_videos),
        }
    }
}

/// `"{h}h {m}m {s}s"`
pub fn format_seconds(total: u64) -> String {
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}
