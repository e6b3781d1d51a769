//! Chart handles.
//!
//! Charts are created once with the context and only ever mutated: a
//! refresh replaces labels and dataset values, then bumps the revision the
//! way `chart.update()` redraws in the browser.

use chrono::{Duration, NaiveDate};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    labels: Vec<String>,
    datasets: Vec<Dataset>,
    revision: u64,
}

impl Chart {
    /// An empty chart with one dataset per label.
    pub fn new(kind: ChartKind, dataset_labels: &[&str]) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: dataset_labels
                .iter()
                .map(|label| Dataset {
                    label: label.to_string(),
                    data: Vec::new(),
                })
                .collect(),
            revision: 0,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn dataset(&self, index: usize) -> Option<&Dataset> {
        self.datasets.get(index)
    }

    /// Number of redraws so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    /// Replace one dataset's values. Out-of-range indexes are ignored.
    pub fn set_data(&mut self, index: usize, data: impl Into<Vec<f64>>) {
        if let Some(dataset) = self.datasets.get_mut(index) {
            dataset.data = data.into();
        }
    }

    pub fn set_dataset_label(&mut self, index: usize, label: &str) {
        if let Some(dataset) = self.datasets.get_mut(index) {
            dataset.label = label.to_string();
        }
    }

    pub fn update(&mut self) {
        self.revision += 1;
    }
}

/// Every chart on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Charts {
    pub transaction_volume: Chart,
    pub payment_methods: Chart,
    pub revenue: Chart,
    pub geography: Chart,
    pub revenue_breakdown: Chart,
    pub fee_distribution: Chart,
}

impl Default for Charts {
    fn default() -> Self {
        Self {
            transaction_volume: Chart::new(ChartKind::Line, &["Transaction Volume"]),
            payment_methods: Chart::new(ChartKind::Doughnut, &["Payment Methods"]),
            revenue: Chart::new(ChartKind::Bar, &["Revenue"]),
            geography: Chart::new(ChartKind::Pie, &["Geographic Distribution"]),
            revenue_breakdown: Chart::new(ChartKind::Line, &["Transaction Fees", "Other Fees"]),
            fee_distribution: Chart::new(ChartKind::Doughnut, &["Fee Distribution"]),
        }
    }
}

/// Range selectable for the transaction volume chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Quarter,
}

impl Period {
    /// Parse a selector value; anything unrecognised means the last 7 days.
    pub fn parse(value: &str) -> Period {
        match value {
            "30d" => Period::Month,
            "90d" => Period::Quarter,
            _ => Period::Week,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "7d",
            Period::Month => "30d",
            Period::Quarter => "90d",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::Quarter => 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Demo volume series for `period`: one point per day, oldest first, ending
/// on `today`. Values are whole numbers in `20..120`.
pub fn generate_series<R: Rng>(period: Period, today: NaiveDate, rng: &mut R) -> Series {
    let days = i64::from(period.days());
    let mut labels = Vec::with_capacity(days as usize);
    let mut values = Vec::with_capacity(days as usize);

    for offset in (0..days).rev() {
        let date = today - Duration::days(offset);
        let label = if period == Period::Week {
            date.format("%a").to_string()
        } else {
            date.format("%b %-d").to_string()
        };
        labels.push(label);
        values.push(f64::from(rng.gen_range(20u32..120)));
    }

    Series { labels, values }
}
