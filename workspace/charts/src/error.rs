use std::fmt;

use thiserror::Error;

use crate::descriptor::ChartKind;

/// Error types for the chart renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The series cannot be drawn faithfully by the given chart kind
    #[error("Invalid series for {chart} chart: {problem}")]
    InvalidSeries {
        chart: ChartKind,
        problem: SeriesProblem,
    },
}

impl ChartError {
    pub fn invalid(chart: ChartKind, problem: SeriesProblem) -> Self {
        ChartError::InvalidSeries { chart, problem }
    }

    pub fn problem(&self) -> SeriesProblem {
        match self {
            ChartError::InvalidSeries { problem, .. } => *problem,
        }
    }
}

/// What is wrong with a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesProblem {
    /// No values at all
    Empty,
    /// A line needs at least two points to span the chart
    SingleElement,
    /// All values are equal, so the vertical scale collapses
    ZeroRange,
    /// Weights add up to zero (or less)
    ZeroTotal,
    /// NaN or infinite values
    NonFinite,
    /// A percentage outside `[0, 100]`
    OutOfRange,
    /// Labels and values disagree in length
    LabelMismatch { labels: usize, values: usize },
}

impl fmt::Display for SeriesProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesProblem::Empty => write!(f, "series is empty"),
            SeriesProblem::SingleElement => write!(f, "series has a single element"),
            SeriesProblem::ZeroRange => write!(f, "all values are equal"),
            SeriesProblem::ZeroTotal => write!(f, "weights sum to zero"),
            SeriesProblem::NonFinite => write!(f, "series contains non-finite values"),
            SeriesProblem::OutOfRange => write!(f, "percentage outside 0..=100"),
            SeriesProblem::LabelMismatch { labels, values } => {
                write!(f, "{} labels for {} values", labels, values)
            }
        }
    }
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
