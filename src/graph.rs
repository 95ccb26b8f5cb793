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
//! Bar charts, histograms or cumulative histograms of the response sizes of several algorithms.
use std::process;

use clap::Parser;

use rrsize::{config::DEFAULT_BIN_SIZE, prelude::*, util};

#[derive(Parser, Debug)]
#[command(about = "Create graphs from DNSSEC response sizes", long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
    /// Algorithms to appear in graph.
    #[arg(long, value_name = "A", value_enum, num_args = 1.., required = true)]
    algorithms: Vec<Algorithm>,
    /// Specify chart to display.
    #[arg(long, value_name = "C", value_enum)]
    chart: ChartKind,
    /// Filter graph above a certain value.
    #[arg(long, value_name = "f", allow_negative_numbers = true)]
    filt: Option<i64>,
    /// Width of histogram bins, in bytes.
    #[arg(
        long,
        default_value_t = DEFAULT_BIN_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    bin_size: u32,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    let args = Args::parse();
    let filename = match args.input.require_filename() {
        Ok(filename) => filename,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1)
        }
    };

    let config = ChartConfig {
        title: args.input.title.clone(),
        size_filter: args.filt,
        display_range: None,
        bin_size: args.bin_size,
    };
    log::debug!("Chart configuration: {}", serde_json::to_string(&config)?);

    let log = MeasurementLog::open(filename)?;
    let mut renderer = args.output.renderers(filename, args.chart);
    plot_sizes(&log, &args.algorithms, args.chart, &config, &mut renderer)?;

    Ok(())
}
