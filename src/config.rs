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
//! Command-line arguments shared by all binaries, and the chart configuration derived from them.
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use clap::Args;
use serde::Serialize;

use crate::{
    render::{JsonRenderer, PlotlyRenderer, RendererSet},
    util::PathBufExt,
};

/// Spacing of the ticks on the x axis whenever a display range is given.
pub const AXIS_TICK_SPACING: f64 = 64.0;
/// Default width of a histogram bin, in bytes.
pub const DEFAULT_BIN_SIZE: u32 = 16;
/// Directory in which plots are written if no explicit output path is given.
pub const DEFAULT_PLOT_DIR: &str = "./plots/";

/// Options of a single chart. Absent options are `None` rather than sentinel values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Title of the chart, may be empty.
    pub title: String,
    /// Only keep sizes strictly below this value.
    pub size_filter: Option<i64>,
    /// Range of the x axis. The data itself is not truncated.
    pub display_range: Option<DisplayRange>,
    /// Width of histogram bins, in bytes.
    pub bin_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            size_filter: None,
            display_range: None,
            bin_size: DEFAULT_BIN_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRange {
    pub low: i64,
    pub high: i64,
}

impl DisplayRange {
    /// Build a range from the two values passed to `--rang`.
    pub fn from_args(values: &[i64]) -> Option<Self> {
        match values {
            [low, high] => Some(Self {
                low: *low,
                high: *high,
            }),
            _ => None,
        }
    }
}

/// Arguments selecting the measurement log and the chart title.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File to read values from.
    #[arg(long, value_name = "F")]
    pub filename: Option<PathBuf>,
    /// Graph title.
    #[arg(long, value_name = "T", default_value = "")]
    pub title: String,
}

/// `--filename` is optional for clap, so that its absence can be reported with exit code 1 rather
/// than clap's usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the following argument is required: --filename <F>")]
pub struct MissingFilename;

impl InputArgs {
    /// Returns the measurement log path.
    pub fn require_filename(&self) -> Result<&Path, MissingFilename> {
        self.filename.as_deref().ok_or(MissingFilename)
    }
}

/// Arguments controlling where the rendered chart ends up.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the HTML plot to this path instead of `./plots/<log>_<chart>.html`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Open the plot in the browser once it is written.
    #[arg(long)]
    pub show: bool,
    /// Additionally write the traces and the layout as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub dump_json: Option<PathBuf>,
}

impl OutputArgs {
    /// Path of the HTML plot for the log at `input` showing a chart of type `chart`.
    pub fn html_path(&self, input: &Path, chart: impl Display) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "rrsize".to_string());
        PathBuf::from(DEFAULT_PLOT_DIR).then(format!("{stem}_{chart}.html"))
    }

    /// All renderers requested on the command line.
    pub fn renderers(&self, input: &Path, chart: impl Display) -> RendererSet {
        let mut renderers = RendererSet::new();
        renderers.push(PlotlyRenderer::new(self.html_path(input, chart)).show(self.show));
        if let Some(path) = &self.dump_json {
            renderers.push(JsonRenderer::new(path));
        }
        renderers
    }
}
