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

use arinc424::fields;

use super::{AltDescriptor, LegType, TurnDirection};

impl From<fields::PathTerm> for LegType {
    fn from(value: fields::PathTerm) -> Self {
        match value {
            fields::PathTerm::ArcToFix => Self::ArcToFix,
            fields::PathTerm::CourseToAltitude => Self::CourseToAltitude,
            fields::PathTerm::CourseToDmeDistance => Self::CourseToDmeDistance,
            fields::PathTerm::CourseToFix => Self::CourseToFix,
            fields::PathTerm::CourseToIntercept => Self::CourseToIntercept,
            fields::PathTerm::CourseToRadialTermination => Self::CourseToRadialTermination,
            fields::PathTerm::DirectToFix => Self::DirectToFix,
            fields::PathTerm::FixToAltitude => Self::FixToAltitude,
            fields::PathTerm::TrackFromFixFromDistance => Self::TrackFromFixFromDistance,
            fields::PathTerm::TrackFromFixToDmeDistance => Self::TrackFromFixToDmeDistance,
            fields::PathTerm::FromFixToManualTermination => Self::FromFixToManualTermination,
            fields::PathTerm::HoldToAltitude => Self::HoldToAltitude,
            fields::PathTerm::HoldToFix => Self::HoldToFix,
            fields::PathTerm::HoldToManualTermination => Self::HoldToManualTermination,
            fields::PathTerm::InitialFix => Self::InitialFix,
            fields::PathTerm::ProcedureTurn => Self::ProcedureTurn,
            fields::PathTerm::ConstantRadiusArc => Self::ConstantRadiusArc,
            fields::PathTerm::TrackToFix => Self::TrackToFix,
            fields::PathTerm::HeadingToAltitude => Self::HeadingToAltitudeTermination,
            fields::PathTerm::HeadingToDmeDistance => Self::HeadingToDmeDistanceTermination,
            fields::PathTerm::HeadingToIntercept => Self::HeadingToIntercept,
            fields::PathTerm::HeadingToManualTermination => Self::HeadingToManualTermination,
            fields::PathTerm::HeadingToRadialTermination => Self::HeadingToRadialTermination,
        }
    }
}

impl From<fields::TurnDir> for TurnDirection {
    fn from(value: fields::TurnDir) -> Self {
        match value {
            fields::TurnDir::Left => Self::Left,
            fields::TurnDir::Right => Self::Right,
            fields::TurnDir::Either => Self::Either,
        }
    }
}

impl From<fields::AltDesc> for AltDescriptor {
    fn from(value: fields::AltDesc) -> Self {
        match value {
            fields::AltDesc::At => Self::At,
            fields::AltDesc::AtOrAbove => Self::AtOrAbove,
            fields::AltDesc::AtOrBelow => Self::AtOrBelow,
            fields::AltDesc::Between => Self::Between,
        }
    }
}
