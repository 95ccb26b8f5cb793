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
//! Library for charting DNSSEC response sizes, grouped by signing algorithm.
//!
//! A measurement log is parsed into [`records::MeasurementLog`], from which the response sizes of
//! individual algorithms (or the number of responses per algorithm) are extracted. The
//! [`chart`] module turns those into traces, which a [`render::Renderer`] draws.

pub mod algorithm;
pub mod chart;
pub mod config;
pub mod pipeline;
pub mod records;
pub mod render;
pub mod util;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use super::{
        algorithm::Algorithm,
        chart::{ChartKind, ChartTrace, Layout},
        config::{ChartConfig, DisplayRange, InputArgs, OutputArgs},
        pipeline::{plot_algorithm_share, plot_sizes},
        records::MeasurementLog,
        render::Renderer,
    };
}
