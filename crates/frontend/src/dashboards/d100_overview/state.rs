//! Chart series of the overview dashboard

use contracts::dashboards::d100_overview::{
    AgentAverage, FeedbackAverage, RegionSalesTotal, ReportTypeCounts,
};

/// Parallel label / value vectors fed to one chart
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl FromIterator<(String, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, data) = iter.into_iter().unzip();
        Self { labels, data }
    }
}

pub fn sales_series(rows: &[RegionSalesTotal]) -> Series {
    rows.iter()
        .map(|r| (r.region.clone(), r.total_amount))
        .collect()
}

pub fn agent_series(rows: &[AgentAverage]) -> Series {
    rows.iter()
        .map(|r| (r.name.clone(), r.average_performance))
        .collect()
}

pub fn feedback_series(rows: &[FeedbackAverage]) -> Series {
    rows.iter()
        .map(|r| (r.feedback_type.clone(), r.average_performance))
        .collect()
}

pub fn report_type_series(counts: &ReportTypeCounts) -> Series {
    counts
        .report_types
        .iter()
        .cloned()
        .zip(counts.report_counts.iter().map(|c| *c as f64))
        .collect()
}

/// One chart panel. The spinner stays until a fetch succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
    pub series: Series,
    pub loading: bool,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            series: Series::default(),
            loading: true,
        }
    }
}

impl ChartState {
    pub fn apply<T, E: std::fmt::Display>(
        &mut self,
        result: Result<T, E>,
        to_series: impl FnOnce(&T) -> Series,
        what: &str,
    ) {
        match result {
            Ok(rows) => {
                self.series = to_series(&rows);
                self.loading = false;
            }
            Err(e) => log::error!("Error fetching {}: {}", what, e),
        }
    }
}
