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
//! Properties that have to hold for any measurement log, checked on the test logs.

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    algorithm::Algorithm,
    chart::{cumulative_histogram, ChartTrace},
    records::{FrequencyMap, MeasurementLog, HEADER_LINES},
};

use super::load;

const LOGS: [&str; 2] = ["scenario.txt", "mixed.txt"];

#[test]
fn header_never_counted() {
    let log = load("mixed.txt");
    assert!(log.records().all(|r| r.line > HEADER_LINES));
    // the header of mixed.txt consists of three valid-looking records with size 4096
    for alg in Algorithm::iter() {
        assert!(!log.size_series(alg, None).unwrap().contains(&4096));
    }
    assert_eq!(log.algorithm_frequencies().get(&8), Some(&2));
}

#[test]
fn series_contains_exactly_matching_records() {
    for name in LOGS {
        let log = load(name);
        for alg in Algorithm::iter() {
            let expected = log
                .records()
                .filter(|r| r.algorithm == alg.id())
                .map(|r| r.size().unwrap())
                .collect_vec();
            assert_eq!(log.size_series(alg, None).unwrap(), expected, "{name}: {alg}");
        }
    }
}

#[test]
fn filter_keeps_ordered_subsequence() {
    let log = load("mixed.txt");
    for alg in Algorithm::iter() {
        let all = log.size_series(alg, None).unwrap();
        for filter in [0, 296, 388, 400, 1239, 1240, 5000] {
            let expected = all.iter().copied().filter(|s| *s < filter).collect_vec();
            assert_eq!(log.size_series(alg, Some(filter)).unwrap(), expected);
        }
    }
    assert_eq!(
        log.size_series(Algorithm::EcdsaP256Sha256, Some(400)).unwrap(),
        vec![388, 296]
    );
}

#[test]
fn frequencies_sum_to_valid_lines() {
    let log = load("mixed.txt");
    let frequencies = log.algorithm_frequencies();
    assert_eq!(frequencies.values().sum::<usize>(), log.records().count());
    assert_eq!(
        frequencies,
        FrequencyMap::from([(3, 2), (7, 1), (8, 2), (10, 1), (12, 1), (13, 3), (15, 1)])
    );
}

#[test]
fn cumulative_distribution_ends_at_100() {
    let log = load("mixed.txt");
    for bin_size in [1, 16, 64, 1000] {
        for alg in Algorithm::iter() {
            let series = log.size_series(alg, None).unwrap();
            let ChartTrace::Histogram(h) = cumulative_histogram(alg.label(), &series, bin_size)
            else {
                unreachable!()
            };
            let dist = h.distribution();
            if series.is_empty() {
                assert!(dist.is_empty());
                continue;
            }
            assert!(dist.windows(2).all(|w| w[0].1 <= w[1].1));
            assert!((dist.last().unwrap().1 - 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn scenario_from_string() {
    let log: MeasurementLog = "h1\nh2\nh3\na.com 512 13\nb.com 700 13\nc.com 512 8\n"
        .parse()
        .unwrap();
    assert_eq!(
        log.size_series(Algorithm::EcdsaP256Sha256, None).unwrap(),
        load("scenario.txt")
            .size_series(Algorithm::EcdsaP256Sha256, None)
            .unwrap()
    );
}
