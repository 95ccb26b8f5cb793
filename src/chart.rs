// RRSIZE: Charts of DNSSEC Response Sizes per Signing Algorithm
// Copyright (C) 2026 The RRSIZE Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Construction of chart traces and layouts from extracted response sizes.
//!
//! The traces built here only describe what should be drawn. Turning them into an actual plot is
//! the job of a [`Renderer`](crate::render::Renderer).
use std::collections::BTreeMap;

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    algorithm::label_for_id,
    config::{ChartConfig, DisplayRange, AXIS_TICK_SPACING},
    records::FrequencyMap,
};

/// Opacity of cumulative histograms, such that overlapping series remain visible.
pub const CUMULATIVE_OPACITY: f64 = 0.6;

const SIZE_AXIS_TITLE: &str = "size (bytes)";
const FREQUENCY_AXIS_TITLE: &str = "frequency";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Number of responses per distinct size.
    #[strum(to_string = "bar")]
    Bar,
    /// Percentage of responses per size bin.
    #[value(name = "hist")]
    #[strum(to_string = "hist")]
    Histogram,
    /// Accumulated percentage of responses up to each size bin.
    #[value(name = "cumm")]
    #[strum(to_string = "cumm")]
    Cumulative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartTrace {
    Bar(BarTrace),
    Histogram(HistogramTrace),
    Pie(PieTrace),
}

impl ChartTrace {
    pub fn name(&self) -> &str {
        match self {
            ChartTrace::Bar(t) => &t.name,
            ChartTrace::Histogram(t) => &t.name,
            ChartTrace::Pie(t) => &t.name,
        }
    }
}

/// Distinct sizes on the x axis, and how often each of them occurs on the y axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<i64>,
    pub y: Vec<usize>,
}

/// Raw sizes, binned and normalized to percent by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramTrace {
    pub name: String,
    pub x: Vec<i64>,
    pub bin_size: u32,
    pub cumulative: bool,
    pub opacity: Option<f64>,
}

/// Bin edges of a histogram. Each bin includes its lower edge and excludes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bins {
    pub start: i64,
    pub end: i64,
    pub size: i64,
}

impl HistogramTrace {
    /// Bins covering all values, aligned to multiples of the bin size. `None` for an empty series,
    /// or when the outer edges do not fit into an `i64`.
    pub fn bins(&self) -> Option<Bins> {
        let size = self.bin_size.max(1) as i64;
        let (min, max) = self.x.iter().copied().minmax().into_option()?;
        Some(Bins {
            start: min.div_euclid(size).checked_mul(size)?,
            end: max.div_euclid(size).checked_add(1)?.checked_mul(size)?,
            size,
        })
    }

    /// Percentage of values per bin, as `(lower edge, percent)`, ordered by edge. Only bins that
    /// hold at least one value are listed. For cumulative histograms, each bin holds the sum of
    /// all bins up to and including itself.
    pub fn distribution(&self) -> Vec<(i64, f64)> {
        let size = self.bin_size.max(1) as i64;
        let total = self.x.len() as f64;
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for x in self.x.iter() {
            *counts.entry(x.div_euclid(size)).or_default() += 1;
        }

        let mut acc = 0.0;
        counts
            .into_iter()
            .map(|(idx, count)| {
                // the lowest bin may start below i64::MIN, its values still lie above the edge
                let edge = idx.saturating_mul(size);
                let percent = count as f64 * 100.0 / total;
                if self.cumulative {
                    acc += percent;
                    (edge, acc)
                } else {
                    (edge, percent)
                }
            })
            .collect()
    }
}

/// One slice per label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieTrace {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub x_axis: Option<AxisLayout>,
    pub y_axis: Option<AxisLayout>,
    /// Draw the bars of different traces on top of each other instead of next to each other.
    pub overlay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: String,
    pub range: Option<DisplayRange>,
    pub tick_spacing: Option<f64>,
}

impl AxisLayout {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
            tick_spacing: None,
        }
    }
}

/// Count how often each distinct size occurs.
pub fn bar(name: impl Into<String>, series: &[i64]) -> ChartTrace {
    let (x, y) = series
        .iter()
        .copied()
        .sorted()
        .group_by(|size| *size)
        .into_iter()
        .map(|(size, group)| (size, group.count()))
        .unzip();
    ChartTrace::Bar(BarTrace {
        name: name.into(),
        x,
        y,
    })
}

/// Histogram of the series, normalized to percent.
pub fn histogram(name: impl Into<String>, series: &[i64], bin_size: u32) -> ChartTrace {
    ChartTrace::Histogram(HistogramTrace {
        name: name.into(),
        x: series.to_vec(),
        bin_size,
        cumulative: false,
        opacity: None,
    })
}

/// Cumulative histogram of the series, normalized to percent.
pub fn cumulative_histogram(name: impl Into<String>, series: &[i64], bin_size: u32) -> ChartTrace {
    ChartTrace::Histogram(HistogramTrace {
        name: name.into(),
        x: series.to_vec(),
        bin_size,
        cumulative: true,
        opacity: Some(CUMULATIVE_OPACITY),
    })
}

/// Share of records per algorithm. Slices are ordered by algorithm identifier.
pub fn pie(name: impl Into<String>, frequencies: &FrequencyMap) -> ChartTrace {
    let (labels, values) = frequencies
        .iter()
        .map(|(id, count)| (label_for_id(*id), *count))
        .unzip();
    ChartTrace::Pie(PieTrace {
        name: name.into(),
        labels,
        values,
    })
}

/// Build the trace of the given kind for a single series.
pub fn build_trace(
    kind: ChartKind,
    name: impl Into<String>,
    series: &[i64],
    config: &ChartConfig,
) -> ChartTrace {
    match kind {
        ChartKind::Bar => bar(name, series),
        ChartKind::Histogram => histogram(name, series, config.bin_size),
        ChartKind::Cumulative => cumulative_histogram(name, series, config.bin_size),
    }
}

/// Layout for charts with sizes on the x axis.
pub fn size_layout(kind: ChartKind, config: &ChartConfig) -> Layout {
    let mut x_axis = AxisLayout::titled(SIZE_AXIS_TITLE);
    if let Some(range) = config.display_range {
        x_axis.range = Some(range);
        x_axis.tick_spacing = Some(AXIS_TICK_SPACING);
    }
    Layout {
        title: config.title.clone(),
        x_axis: Some(x_axis),
        y_axis: Some(AxisLayout::titled(FREQUENCY_AXIS_TITLE)),
        overlay: kind == ChartKind::Cumulative,
    }
}

/// Layout for pie charts, which have no axes.
pub fn pie_layout(config: &ChartConfig) -> Layout {
    Layout {
        title: config.title.clone(),
        x_axis: None,
        y_axis: None,
        overlay: false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hist(trace: ChartTrace) -> HistogramTrace {
        match trace {
            ChartTrace::Histogram(h) => h,
            t => panic!("expected a histogram, got {t:?}"),
        }
    }

    #[test]
    fn bar_counts_distinct_sizes() {
        let ChartTrace::Bar(trace) = bar("13", &[700, 512, 700, 1024, 512, 700]) else {
            panic!("expected a bar trace");
        };
        assert_eq!(trace.name, "13");
        assert_eq!(trace.x, vec![512, 700, 1024]);
        assert_eq!(trace.y, vec![2, 3, 1]);
    }

    #[test]
    fn bar_of_empty_series() {
        let ChartTrace::Bar(trace) = bar("5", &[]) else {
            panic!("expected a bar trace");
        };
        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
    }

    #[test]
    fn bins_are_aligned() {
        let h = hist(histogram("8", &[17, 40, 31], 16));
        assert_eq!(
            h.bins(),
            Some(Bins {
                start: 16,
                end: 48,
                size: 16
            })
        );
        let h = hist(histogram("8", &[-3, 0], 16));
        assert_eq!(
            h.bins(),
            Some(Bins {
                start: -16,
                end: 16,
                size: 16
            })
        );
        assert_eq!(hist(histogram("8", &[], 16)).bins(), None);
    }

    #[test]
    fn histogram_in_percent() {
        let h = hist(histogram("8", &[0, 1, 20, 50], 16));
        assert_eq!(
            h.distribution(),
            vec![(0, 50.0), (16, 25.0), (48, 25.0)]
        );
        assert!(!h.cumulative);
        assert_eq!(h.opacity, None);
    }

    #[test]
    fn cumulative_histogram_reaches_100() {
        let series = [1200, 512, 530, 700, 700, 64, 999, 1500, 512, 3];
        let h = hist(cumulative_histogram("13", &series, 16));
        assert!(h.cumulative);
        assert_eq!(h.opacity, Some(CUMULATIVE_OPACITY));

        let dist = h.distribution();
        assert!(!dist.is_empty());
        assert!(dist.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!((dist.last().unwrap().1 - 100.0).abs() < 1e-9);
        assert!(dist.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(dist.iter().all(|(edge, _)| edge % 16 == 0));
    }

    #[test]
    fn extreme_sizes() {
        let h = hist(histogram("13", &[i64::MAX, 512], 16));
        assert_eq!(h.bins(), None);
        assert_eq!(h.distribution(), vec![(512, 50.0), (i64::MAX - 15, 50.0)]);

        let h = hist(cumulative_histogram("13", &[i64::MIN, -1], 3));
        assert_eq!(h.bins(), None);
        let dist = h.distribution();
        assert_eq!(dist[0], (i64::MIN, 50.0));
        assert_eq!(dist[1], (-3, 100.0));

        // exactly representable edges still get explicit bins
        let h = hist(histogram("13", &[i64::MIN, 0], 16));
        assert_eq!(
            h.bins(),
            Some(Bins {
                start: i64::MIN,
                end: 16,
                size: 16
            })
        );
    }

    #[test]
    fn empty_histogram_has_no_distribution() {
        assert!(hist(cumulative_histogram("13", &[], 16))
            .distribution()
            .is_empty());
    }

    #[test]
    fn pie_slices() {
        let frequencies = FrequencyMap::from([(13, 2), (8, 1), (42, 5)]);
        let ChartTrace::Pie(trace) = pie("", &frequencies) else {
            panic!("expected a pie trace");
        };
        assert_eq!(
            trace.labels,
            vec!["8 (RSASHA256)", "13 (ECDSAP256SHA256)", "42"]
        );
        assert_eq!(trace.values, vec![1, 2, 5]);
    }

    #[test]
    fn layout_with_range() {
        let config = ChartConfig {
            title: "Response sizes".to_string(),
            display_range: Some(DisplayRange { low: 0, high: 2048 }),
            ..Default::default()
        };
        let layout = size_layout(ChartKind::Bar, &config);
        assert_eq!(layout.title, "Response sizes");
        let x_axis = layout.x_axis.unwrap();
        assert_eq!(x_axis.title, "size (bytes)");
        assert_eq!(x_axis.range, Some(DisplayRange { low: 0, high: 2048 }));
        assert_eq!(x_axis.tick_spacing, Some(64.0));
        assert_eq!(layout.y_axis.unwrap().title, "frequency");
        assert!(!layout.overlay);
    }

    #[test]
    fn layout_without_range() {
        let layout = size_layout(ChartKind::Cumulative, &ChartConfig::default());
        assert_eq!(layout.title, "");
        let x_axis = layout.x_axis.unwrap();
        assert_eq!(x_axis.range, None);
        assert_eq!(x_axis.tick_spacing, None);
        assert!(layout.overlay);

        let layout = pie_layout(&ChartConfig::default());
        assert!(layout.x_axis.is_none() && layout.y_axis.is_none());
    }

    #[test]
    fn trace_kinds() {
        let config = ChartConfig::default();
        assert!(matches!(
            build_trace(ChartKind::Bar, "8", &[1], &config),
            ChartTrace::Bar(_)
        ));
        assert!(!hist(build_trace(ChartKind::Histogram, "8", &[1], &config)).cumulative);
        assert!(hist(build_trace(ChartKind::Cumulative, "8", &[1], &config)).cumulative);
    }

    #[test]
    fn chart_kind_names() {
        assert_eq!(ChartKind::from_str("cumm", false), Ok(ChartKind::Cumulative));
        assert_eq!(ChartKind::from_str("hist", false), Ok(ChartKind::Histogram));
        assert_eq!(ChartKind::Bar.to_string(), "bar");
        assert!(ChartKind::from_str("pie", false).is_err());
    }
}
