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
//! Pie chart of the number of responses per signing algorithm.
use std::process;

use clap::Parser;

use rrsize::{prelude::*, util};

#[derive(Parser, Debug)]
#[command(about = "Create graphs from DNSSEC response sizes", long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
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
        ..Default::default()
    };

    let log = MeasurementLog::open(filename)?;
    let mut renderer = args.output.renderers(filename, "pie");
    plot_algorithm_share(&log, &config, &mut renderer)?;

    Ok(())
}
