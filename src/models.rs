use crate::chart::types::SLOTS;
use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Analytic keys drawn by [`crate::Dashboard::init_charts`], in draw order.
pub const EMPLOYEE: &str = "employee";
pub const SSH: &str = "ssh";
pub const SIGNS: &str = "signs";

/// A point in viewport coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One metric's values, exactly one per viewport slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Series([f64; SLOTS]);

impl Series {
    /// Validate a slice of raw values: length must match the slot count and
    /// every value must be finite and non-negative.
    pub fn new(values: &[f64]) -> Result<Self> {
        let arr: [f64; SLOTS] = values
            .try_into()
            .map_err(|_| ChartError::InvalidSeriesLength {
                what: "series",
                expected: SLOTS,
                actual: values.len(),
            })?;
        if let Some((index, &value)) = arr
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::InvalidValue { index, value });
        }
        Ok(Self(arr))
    }

    pub fn values(&self) -> &[f64; SLOTS] {
        &self.0
    }

    /// Largest value in the series.
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = ChartError;

    fn try_from(v: Vec<f64>) -> Result<Self> {
        Series::new(&v)
    }
}

impl From<Series> for Vec<f64> {
    fn from(s: Series) -> Self {
        s.0.to_vec()
    }
}

/// X-axis labels, parallel to a [`Series`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSet([String; SLOTS]);

impl LabelSet {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.len() != SLOTS {
            return Err(ChartError::InvalidSeriesLength {
                what: "label set",
                expected: SLOTS,
                actual: labels.len(),
            });
        }
        Ok(Self(std::array::from_fn(|i| labels[i].as_ref().to_string())))
    }

    pub fn labels(&self) -> &[String; SLOTS] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for LabelSet {
    type Error = ChartError;

    fn try_from(v: Vec<String>) -> Result<Self> {
        LabelSet::new(&v)
    }
}

impl From<LabelSet> for Vec<String> {
    fn from(l: LabelSet) -> Self {
        l.0.to_vec()
    }
}

/// Input for one dashboard refresh: a shared label set and the three metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub employee: Vec<f64>,
    pub ssh: Vec<f64>,
    pub signs: Vec<f64>,
}
