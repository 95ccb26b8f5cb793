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
//! Rendering of chart traces, either as interactive plotly HTML or as plain JSON.
use std::{
    fs,
    path::{Path, PathBuf},
};

use plotly::{
    histogram::{Bins, Cumulative, HistNorm},
    layout::{Axis, BarMode},
    Bar, Histogram, Pie, Plot,
};
use serde::Serialize;

use crate::chart::{AxisLayout, ChartTrace, Layout};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that turns traces and a layout into a visible chart.
pub trait Renderer {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError> {
        (**self).render(traces, layout)
    }
}

/// Writes a self-contained plotly HTML file, and optionally opens it in the browser.
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    output: PathBuf,
    show: bool,
}

impl PlotlyRenderer {
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            show: false,
        }
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Build the plotly plot without writing it anywhere.
    pub fn plot(traces: &[ChartTrace], layout: &Layout) -> Plot {
        let mut plot = Plot::new();

        for trace in traces {
            match trace {
                ChartTrace::Bar(t) => {
                    plot.add_trace(Bar::new(t.x.clone(), t.y.clone()).name(&t.name))
                }
                ChartTrace::Histogram(t) => {
                    let mut hist = Histogram::new(t.x.clone())
                        .name(&t.name)
                        .hist_norm(HistNorm::Percent);
                    // without explicit bins, plotly picks them itself
                    if let Some(bins) = t.bins() {
                        hist = hist.x_bins(Bins::new(
                            bins.start as f64,
                            bins.end as f64,
                            bins.size as f64,
                        ));
                    }
                    if t.cumulative {
                        hist = hist.cumulative(Cumulative::new().enabled(true));
                    }
                    if let Some(opacity) = t.opacity {
                        hist = hist.opacity(opacity);
                    }
                    plot.add_trace(hist);
                }
                ChartTrace::Pie(t) => plot.add_trace(
                    Pie::new(t.values.clone())
                        .labels(t.labels.clone())
                        .name(&t.name),
                ),
            }
        }

        let mut plotly_layout = plotly::Layout::new().title(layout.title.clone());
        if let Some(x_axis) = &layout.x_axis {
            plotly_layout = plotly_layout.x_axis(axis(x_axis));
        }
        if let Some(y_axis) = &layout.y_axis {
            plotly_layout = plotly_layout.y_axis(axis(y_axis));
        }
        if layout.overlay {
            plotly_layout = plotly_layout.bar_mode(BarMode::Overlay);
        }
        plot.set_layout(plotly_layout);

        plot
    }
}

fn axis(layout: &AxisLayout) -> Axis {
    let mut axis = Axis::new().title(layout.title.clone());
    if let Some(range) = layout.range {
        axis = axis.range(vec![range.low as f64, range.high as f64]);
    }
    if let Some(dtick) = layout.tick_spacing {
        axis = axis.dtick(dtick);
    }
    axis
}

impl Renderer for PlotlyRenderer {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError> {
        if let Some(dir) = self.output.parent() {
            fs::create_dir_all(dir)?;
        }
        let plot = Self::plot(traces, layout);
        plot.write_html(&self.output);
        log::info!(
            "Written plot to: {}",
            self.output.as_os_str().to_string_lossy()
        );

        if self.show {
            plot.show();
        }

        Ok(())
    }
}

/// The description of a chart, as handed to a renderer.
#[derive(Debug, Serialize)]
pub struct Figure<'a> {
    pub traces: &'a [ChartTrace],
    pub layout: &'a Layout,
}

/// Writes the traces and the layout as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    output: PathBuf,
}

impl JsonRenderer {
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError> {
        if let Some(dir) = self.output.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(
            &self.output,
            serde_json::to_string_pretty(&Figure { traces, layout })?,
        )?;
        log::info!(
            "Written chart description to: {}",
            self.output.as_os_str().to_string_lossy()
        );
        Ok(())
    }
}

/// Hands the same chart to several renderers, in order. Stops at the first error.
#[derive(Default)]
pub struct RendererSet {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, renderer: impl Renderer + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Renderer for RendererSet {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError> {
        for renderer in self.renderers.iter_mut() {
            renderer.render(traces, layout)?;
        }
        Ok(())
    }
}
