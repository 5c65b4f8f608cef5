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

//! Geometry pipeline.
//!
//! Turns the coded legs of a [`LegSequence`] into their flyable geometry. The
//! passes run in this order and each pass relies on the fields written by the
//! passes before:
//!
//! 1. legs without magnetic variation take the airport's,
//! 2. the line of every leg is constructed,
//! 3. intercept legs are ended where they meet the next leg,
//! 4. the distance and course of every leg is calculated,
//! 5. the bounding of the sequence is extended by all legs.
//!
//! Geometry that can't be constructed as coded is placed degraded so that the
//! sequence remains drawable. Each of those legs is logged and recorded as a
//! [`Diagnostic`] on the sequence.

use log::debug;

use crate::leg::{Leg, LegSequence};
use crate::measurements::Length;
use crate::nd::Airport;

mod diagnostic;
mod distance;
mod intercept;
mod path;

pub use diagnostic::{Diagnostic, DiagnosticKind};

/// Length of legs terminated by altitude or manually.
const TERMINATION_LENGTH: Length = Length::nm(3.0);

/// Runs all passes over the legs of the sequence.
pub fn process(airport: &Airport, legs: &mut LegSequence) {
    let mut diagnostics = Vec::new();

    update_mag_var(airport, legs.legs_mut());
    path::construct(legs.legs_mut(), &mut diagnostics);
    intercept::resolve(legs.legs_mut(), &mut diagnostics);
    distance::aggregate(legs.legs_mut());
    update_bounding(legs);

    debug!(
        "processed {} leg(s) of {} approach {} with {} diagnostic(s)",
        legs.len(),
        airport.ident,
        legs.reference().approach_id,
        diagnostics.len()
    );

    legs.diagnostics_mut().extend(diagnostics);
}

fn update_mag_var(airport: &Airport, legs: &mut [Leg]) {
    for leg in legs.iter_mut().filter(|leg| leg.mag_var.is_none()) {
        leg.mag_var = Some(airport.mag_var);
    }
}

fn update_bounding(legs: &mut LegSequence) {
    let mut bounding = *legs.bounding();

    for leg in legs.legs() {
        if let Some(fix) = &leg.fix.coordinate {
            bounding.extend_point(fix);
        }
        if let Some(intercept) = &leg.intercept_pos {
            bounding.extend_point(intercept);
        }
        if let Some(line) = leg.line.filter(|line| line.is_valid()) {
            bounding.extend_rect(&line.bounding_rect());
        }
    }

    *legs.bounding_mut() = bounding;
}
