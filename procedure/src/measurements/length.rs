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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, UnitOfMeasure};

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    Meters,
    NauticalMiles,
}

impl UnitOfMeasure<f64> for LengthUnit {
    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::NauticalMiles => "NM",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
        }
    }
}

/// Horizontal distance on the earth's surface.
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    pub const fn m(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    pub const fn nm(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::NauticalMiles,
        }
    }

    /// Returns the length in nautical miles.
    pub fn to_nm(&self) -> f64 {
        LengthUnit::from_si(self.to_si(), &LengthUnit::NauticalMiles)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::m(0.0)
    }
}
