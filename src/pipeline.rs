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
//! A single pass from a measurement log to a rendered chart: extract, group, build traces, render.
use crate::{
    algorithm::Algorithm,
    chart::{self, ChartKind, ChartTrace},
    config::ChartConfig,
    records::{self, MeasurementLog},
    render::{RenderError, Renderer},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Records(#[from] records::Error),
    #[error("Could not render the chart: {0}")]
    Render(#[from] RenderError),
}

/// Plot the response sizes of each of the `algorithms`, one trace per algorithm in the given order.
pub fn plot_sizes<R: Renderer + ?Sized>(
    log: &MeasurementLog,
    algorithms: &[Algorithm],
    kind: ChartKind,
    config: &ChartConfig,
    renderer: &mut R,
) -> Result<(), Error> {
    let traces = algorithms
        .iter()
        .map(|alg| {
            let series = log.size_series(*alg, config.size_filter)?;
            Ok(chart::build_trace(kind, alg.label(), &series, config))
        })
        .collect::<Result<Vec<_>, records::Error>>()?;
    log::debug!(
        "Rendering {kind} chart with traces {:?}",
        traces.iter().map(ChartTrace::name).collect::<Vec<_>>()
    );

    renderer.render(&traces, &chart::size_layout(kind, config))?;
    Ok(())
}

/// Plot the share of records per algorithm as a pie chart.
pub fn plot_algorithm_share<R: Renderer + ?Sized>(
    log: &MeasurementLog,
    config: &ChartConfig,
    renderer: &mut R,
) -> Result<(), Error> {
    let frequencies = log.algorithm_frequencies();
    let trace = chart::pie(config.title.clone(), &frequencies);
    renderer.render(&[trace], &chart::pie_layout(config))?;
    Ok(())
}
