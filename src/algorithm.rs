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
//! DNSSEC signing algorithms that appear in the measurement logs.
//!
//! The identifiers are the IANA "DNS Security Algorithm Numbers". Only the algorithms for which
//! measurements are collected are listed here; everything else is rejected on the command line.
use clap::ValueEnum;
use serde::Serialize;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Algorithm {
    /// DSA/SHA-1
    #[value(name = "3")]
    #[strum(to_string = "DSA")]
    Dsa = 3,
    /// RSA/SHA-1
    #[value(name = "5")]
    #[strum(to_string = "RSASHA1")]
    RsaSha1 = 5,
    /// DSA/SHA-1 with NSEC3
    #[value(name = "6")]
    #[strum(to_string = "DSA-NSEC3-SHA1")]
    DsaNsec3Sha1 = 6,
    /// RSA/SHA-1 with NSEC3
    #[value(name = "7")]
    #[strum(to_string = "RSASHA1-NSEC3-SHA1")]
    RsaSha1Nsec3Sha1 = 7,
    /// RSA/SHA-256
    #[value(name = "8")]
    #[strum(to_string = "RSASHA256")]
    RsaSha256 = 8,
    /// RSA/SHA-512
    #[value(name = "10")]
    #[strum(to_string = "RSASHA512")]
    RsaSha512 = 10,
    /// ECDSA Curve P-256 with SHA-256
    #[value(name = "13")]
    #[strum(to_string = "ECDSAP256SHA256")]
    EcdsaP256Sha256 = 13,
    /// ECDSA Curve P-384 with SHA-384
    #[value(name = "14")]
    #[strum(to_string = "ECDSAP384SHA384")]
    EcdsaP384Sha384 = 14,
    /// Ed25519
    #[value(name = "15")]
    #[strum(to_string = "ED25519")]
    Ed25519 = 15,
}

impl Algorithm {
    /// Numeric identifier as written in the third column of a measurement log.
    pub fn id(self) -> i64 {
        self as u8 as i64
    }

    /// Name used for traces and pie slices, e.g. `13 (ECDSAP256SHA256)`.
    pub fn label(self) -> String {
        format!("{} ({self})", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown DNSSEC algorithm identifier: {0}")]
pub struct UnknownAlgorithm(pub i64);

impl TryFrom<i64> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            3 => Ok(Self::Dsa),
            5 => Ok(Self::RsaSha1),
            6 => Ok(Self::DsaNsec3Sha1),
            7 => Ok(Self::RsaSha1Nsec3Sha1),
            8 => Ok(Self::RsaSha256),
            10 => Ok(Self::RsaSha512),
            13 => Ok(Self::EcdsaP256Sha256),
            14 => Ok(Self::EcdsaP384Sha384),
            15 => Ok(Self::Ed25519),
            _ => Err(UnknownAlgorithm(id)),
        }
    }
}

/// Label for a raw identifier taken from a log file, which may not be a known algorithm.
pub fn label_for_id(id: i64) -> String {
    Algorithm::try_from(id)
        .map(Algorithm::label)
        .unwrap_or_else(|_| id.to_string())
}
