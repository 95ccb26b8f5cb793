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
//! Bar chart of the number of responses per distinct size, optionally zoomed to a size range.
use std::process;

use clap::Parser;

use rrsize::{prelude::*, util};

#[derive(Parser, Debug)]
#[command(about = "Create bar charts from DNSSEC response sizes", long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
    /// Algorithms to appear in graph.
    #[arg(long, value_name = "A", value_enum, num_args = 1.., required = true)]
    algorithms: Vec<Algorithm>,
    /// Only show sizes between LOW and HIGH on the x axis.
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_negative_numbers = true)]
    rang: Option<Vec<i64>>,
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
        display_range: args.rang.as_deref().and_then(DisplayRange::from_args),
        ..Default::default()
    };
    log::debug!("Chart configuration: {}", serde_json::to_string(&config)?);

    let log = MeasurementLog::open(filename)?;
    let mut renderer = args.output.renderers(filename, ChartKind::Bar);
    plot_sizes(&log, &args.algorithms, ChartKind::Bar, &config, &mut renderer)?;

    Ok(())
}
