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

//! Measurements with a unit.
//!
//! A [`Measurement`] keeps its value in the unit it was created with and
//! compares and adds through the SI unit. Distances are [`Length`]s and
//! courses are [`Angle`]s.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod angle;
pub mod constants;
mod length;

pub use angle::Angle;
pub use length::{Length, LengthUnit};

/// A unit of a physical quantity that converts from and to its SI unit.
pub trait UnitOfMeasure<T>: Copy {
    /// The SI unit of the quantity.
    fn si() -> Self;

    fn symbol(&self) -> &'static str;

    /// Converts the SI `value` into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts the `value` given in this unit into the SI unit.
    fn to_si(&self, value: &T) -> T;
}

/// A value with its unit of measure.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<T, U> Measurement<T, U>
where
    T: Copy,
    U: UnitOfMeasure<T>,
{
    pub fn new(value: T, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the value in the SI unit.
    pub fn to_si(&self) -> T {
        self.unit.to_si(&self.value)
    }

    /// Returns the measurement converted to the `unit`.
    pub fn convert_to(&self, unit: U) -> Self {
        Self {
            value: U::from_si(self.to_si(), &unit),
            unit,
        }
    }
}

impl<T, U> PartialEq for Measurement<T, U>
where
    T: Copy + PartialEq,
    U: UnitOfMeasure<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_si() == other.to_si()
    }
}

impl<T, U> PartialOrd for Measurement<T, U>
where
    T: Copy + PartialOrd,
    U: UnitOfMeasure<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

impl<T, U> Add for Measurement<T, U>
where
    T: Copy + Add<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: U::from_si(self.to_si() + rhs.to_si(), &self.unit),
            unit: self.unit,
        }
    }
}

impl<T, U> Sub for Measurement<T, U>
where
    T: Copy + Sub<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: U::from_si(self.to_si() - rhs.to_si(), &self.unit),
            unit: self.unit,
        }
    }
}

impl<T, U> Mul<T> for Measurement<T, U>
where
    T: Copy + Mul<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<T, U> Display for Measurement<T, U>
where
    T: Copy + Display,
    U: UnitOfMeasure<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}
