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

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A direction in degrees true, normalized to 0° to less than 360°.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    /// Creates an angle relative to true north.
    pub fn t(degrees: f32) -> Self {
        let degrees = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative values
        Self {
            degrees: if degrees >= 360.0 { 0.0 } else { degrees },
        }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn to_radians(&self) -> f64 {
        (self.degrees as f64).to_radians()
    }

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        *self + 180.0
    }

    /// Returns the smallest difference in degrees to the `other` direction.
    pub fn diff(&self, other: &Angle) -> f32 {
        let diff = (self.degrees - other.degrees).abs();
        diff.min(360.0 - diff)
    }
}

/// Turns the direction clockwise by the degrees.
impl Add<f32> for Angle {
    type Output = Self;

    fn add(self, rhs: f32) -> Self::Output {
        Self::t(self.degrees + rhs)
    }
}

/// Turns the direction counter-clockwise by the degrees.
impl Sub<f32> for Angle {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self::Output {
        Self::t(self.degrees - rhs)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03.0}°", self.degrees)
    }
}
