//! Descriptive statistics over walk lengths

use std::collections::BTreeMap;
use std::fmt;

/// Most frequent value of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// A single value occurs more often than every other value, and more than once
    Unique(usize),
    /// Every value occurs once, or several values share the highest count
    NoUniqueMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unique(value) => write!(f, "{}", value),
            Mode::NoUniqueMode => write!(f, "No unique mode"),
        }
    }
}

/// Summary of one series of lengths
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample standard deviation; `None` for fewer than two values
    pub stdev: Option<f64>,
    pub min: usize,
    pub max: usize,
}

impl SampleStatistics {
    /// Summarize a series. Returns `None` for an empty series.
    pub fn from_lengths(lengths: &[usize]) -> Option<Self> {
        Some(Self {
            count: lengths.len(),
            mean: mean(lengths)?,
            median: median(lengths)?,
            mode: mode(lengths),
            stdev: stdev(lengths),
            min: *lengths.iter().min()?,
            max: *lengths.iter().max()?,
        })
    }
}

pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: usize = values.iter().sum();
    Some(total as f64 / values.len() as f64)
}

/// Middle value; the average of the two middle values for an even count
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}

pub fn mode(values: &[usize]) -> Mode {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let Some(&highest) = counts.values().max() else {
        return Mode::NoUniqueMode;
    };
    if highest < 2 {
        return Mode::NoUniqueMode;
    }

    let mut leaders = counts.iter().filter(|(_, &count)| count == highest);
    match (leaders.next(), leaders.next()) {
        (Some((&value, _)), None) => Mode::Unique(value),
        _ => Mode::NoUniqueMode,
    }
}

/// Sample standard deviation (n - 1 denominator)
pub fn stdev(values: &[usize]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values
        .iter()
        .map(|&value| {
            let diff = value as f64 - mean;
            diff * diff
        })
        .sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[2, 2, 3, 4]), Mode::Unique(2));
        assert_eq!(mode(&[1, 2, 3, 4]), Mode::NoUniqueMode);
        assert_eq!(mode(&[1, 1, 2, 2]), Mode::NoUniqueMode);
        assert_eq!(mode(&[]), Mode::NoUniqueMode);
        assert_eq!(Mode::NoUniqueMode.to_string(), "No unique mode");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3, 1, 2]), Some(2.0));
        assert_eq!(median(&[4, 1, 3, 2]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_stdev() {
        // mean 5, squared deviations sum to 32, n - 1 = 7
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((stdev(&values).unwrap() - expected).abs() < 1e-12);
        assert_eq!(stdev(&[3]), None);
    }

    #[test]
    fn test_summary() {
        let stats = SampleStatistics::from_lengths(&[2, 2, 3, 4]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mode, Mode::Unique(2));
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 4);
        assert!(stats.stdev.is_some());

        assert!(SampleStatistics::from_lengths(&[]).is_none());
    }
}
