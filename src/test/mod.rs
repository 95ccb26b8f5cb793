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
//! Tests running whole charts from the measurement logs in `src/test/data/` through the pipeline,
//! with a renderer that only records what it is given.
//!
//! ```shell
//! cargo test --lib test::
//! ```

use std::path::PathBuf;

use crate::{
    chart::{ChartTrace, Layout},
    records::MeasurementLog,
    render::{RenderError, Renderer},
};

mod properties;

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(Vec<ChartTrace>, Layout)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, traces: &[ChartTrace], layout: &Layout) -> Result<(), RenderError> {
        self.calls.push((traces.to_vec(), layout.clone()));
        Ok(())
    }
}

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src/test/data")
        .join(name)
}

pub fn load(name: &str) -> MeasurementLog {
    MeasurementLog::open(data_path(name)).expect("test data should be readable")
}
