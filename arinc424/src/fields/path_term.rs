// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::field::check_length;
use crate::{Error, FixedField};

/// 5.21 Path and Termination (PATH TERM)
///
/// The "Path and Termination" field defines the path geometry of a single leg
/// of a terminal procedure and the way the leg is terminated.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PathTerm {
    /// AF: DME arc from a radial to a fix.
    ArcToFix,
    /// CA: Course to an altitude.
    CourseToAltitude,
    /// CD: Course to a DME distance.
    CourseToDmeDistance,
    /// CF: Course to a fix.
    CourseToFix,
    /// CI: Course to an intercept of the next leg.
    CourseToIntercept,
    /// CR: Course to a radial termination.
    CourseToRadialTermination,
    /// DF: Direct to a fix.
    DirectToFix,
    /// FA: Course from a fix to an altitude.
    FixToAltitude,
    /// FC: Track from a fix for a distance.
    TrackFromFixFromDistance,
    /// FD: Track from a fix to a DME distance.
    TrackFromFixToDmeDistance,
    /// FM: Course from a fix to a manual termination.
    FromFixToManualTermination,
    /// HA: Holding pattern terminated at an altitude.
    HoldToAltitude,
    /// HF: Holding pattern terminated at the fix after one circuit.
    HoldToFix,
    /// HM: Holding pattern with a manual termination.
    HoldToManualTermination,
    /// IF: Initial fix.
    InitialFix,
    /// PI: Procedure turn.
    ProcedureTurn,
    /// RF: Constant radius arc.
    ConstantRadiusArc,
    /// TF: Track between two fixes.
    TrackToFix,
    /// VA: Heading to an altitude.
    HeadingToAltitude,
    /// VD: Heading to a DME distance.
    HeadingToDmeDistance,
    /// VI: Heading to an intercept of the next leg.
    HeadingToIntercept,
    /// VM: Heading to a manual termination.
    HeadingToManualTermination,
    /// VR: Heading to a radial termination.
    HeadingToRadialTermination,
}

impl FixedField for PathTerm {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, Self::LENGTH)?;

        match &bytes[..Self::LENGTH] {
            b"AF" => Ok(Self::ArcToFix),
            b"CA" => Ok(Self::CourseToAltitude),
            b"CD" => Ok(Self::CourseToDmeDistance),
            b"CF" => Ok(Self::CourseToFix),
            b"CI" => Ok(Self::CourseToIntercept),
            b"CR" => Ok(Self::CourseToRadialTermination),
            b"DF" => Ok(Self::DirectToFix),
            b"FA" => Ok(Self::FixToAltitude),
            b"FC" => Ok(Self::TrackFromFixFromDistance),
            b"FD" => Ok(Self::TrackFromFixToDmeDistance),
            b"FM" => Ok(Self::FromFixToManualTermination),
            b"HA" => Ok(Self::HoldToAltitude),
            b"HF" => Ok(Self::HoldToFix),
            b"HM" => Ok(Self::HoldToManualTermination),
            b"IF" => Ok(Self::InitialFix),
            b"PI" => Ok(Self::ProcedureTurn),
            b"RF" => Ok(Self::ConstantRadiusArc),
            b"TF" => Ok(Self::TrackToFix),
            b"VA" => Ok(Self::HeadingToAltitude),
            b"VD" => Ok(Self::HeadingToDmeDistance),
            b"VI" => Ok(Self::HeadingToIntercept),
            b"VM" => Ok(Self::HeadingToManualTermination),
            b"VR" => Ok(Self::HeadingToRadialTermination),
            bytes => Err(Error::InvalidVariant {
                field: "Path and Termination",
                bytes: bytes.to_vec(),
                expected: "an ARINC 424 path terminator",
            }),
        }
    }
}
