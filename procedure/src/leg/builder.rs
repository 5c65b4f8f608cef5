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

//! Builds [`Leg`]s from the rows of a leg source.

use arinc424::fields::{AltDesc, PathTerm, TurnDir};
use arinc424::FixedField;
use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;
use crate::error::{Error, Result};
use crate::nd::{FixKind, NavaidResolver};

/// The fix columns of a leg row.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixRow {
    /// Fix type code, e.g. `W` for waypoints or `V` for VORs.
    pub kind: Option<String>,
    pub nav_id: i64,
    pub ident: String,
    pub region: String,
}

impl FixRow {
    pub fn new(kind: impl Into<String>, nav_id: i64, ident: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            nav_id,
            ident: ident.into(),
            region: String::new(),
        }
    }
}

/// One approach or transition leg as stored in the navigation database.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegRow {
    pub leg_id: i64,
    pub missed: bool,
    /// Path terminator code, e.g. `CF`.
    pub leg_type: String,
    pub turn_direction: Option<String>,
    pub fix: FixRow,
    pub rec_fix: FixRow,
    pub flyover: bool,
    pub true_course: bool,
    pub course: f32,
    pub distance: f32,
    pub time: f32,
    pub theta: f32,
    pub rho: f32,
    pub altitude1: f32,
    pub altitude2: f32,
    pub alt_descriptor: Option<String>,
}

impl LegRow {
    pub fn new(leg_id: i64, leg_type: impl Into<String>) -> Self {
        Self {
            leg_id,
            leg_type: leg_type.into(),
            ..Default::default()
        }
    }

    pub fn with_fix(mut self, fix: FixRow) -> Self {
        self.fix = fix;
        self
    }

    pub fn with_rec_fix(mut self, rec_fix: FixRow) -> Self {
        self.rec_fix = rec_fix;
        self
    }

    pub fn with_turn_direction(mut self, turn_direction: impl Into<String>) -> Self {
        self.turn_direction = Some(turn_direction.into());
        self
    }

    pub fn with_course(mut self, course: f32) -> Self {
        self.course = course;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_theta_rho(mut self, theta: f32, rho: f32) -> Self {
        self.theta = theta;
        self.rho = rho;
        self
    }

    pub fn with_altitudes(mut self, descriptor: impl Into<String>, alt1: f32, alt2: f32) -> Self {
        self.alt_descriptor = Some(descriptor.into());
        self.altitude1 = alt1;
        self.altitude2 = alt2;
        self
    }
}

/// Builds the leg of the `row` and resolves its fixes.
///
/// Only the coded attributes are set. The geometry is derived later by the
/// pipeline and unresolved fixes leave their position empty.
///
/// # Errors
///
/// Returns [`Error::InvalidLegType`] if the path terminator is unknown.
pub fn build_leg<R>(row: &LegRow, resolver: &R) -> Result<Leg>
where
    R: NavaidResolver + ?Sized,
{
    let leg_type = PathTerm::from_code(&row.leg_type)
        .map(LegType::from)
        .map_err(|error| Error::InvalidLegType {
            leg_id: row.leg_id,
            error,
        })?;

    let mut leg = Leg::new(row.leg_id, leg_type);
    leg.missed = row.missed;
    leg.turn_direction = turn_direction(row);
    leg.flyover = row.flyover;
    leg.true_course_ref = row.true_course;
    leg.course = row.course;
    leg.distance = row.distance;
    leg.time = row.time;
    leg.theta = row.theta;
    leg.rho = row.rho;
    leg.alt_restriction = alt_restriction(row);

    let (fix, fix_mag_var) = resolve_fix(&row.fix, resolver);
    let (rec_fix, rec_fix_mag_var) = resolve_fix(&row.rec_fix, resolver);
    leg.fix = fix;
    leg.rec_fix = rec_fix;
    leg.mag_var = fix_mag_var.or(rec_fix_mag_var);

    trace!("built leg {} ({})", leg.leg_id, leg.leg_type);

    Ok(leg)
}

fn turn_direction(row: &LegRow) -> Option<TurnDirection> {
    let code = row.turn_direction.as_deref()?;

    match Option::<TurnDir>::from_code(code) {
        Ok(dir) => dir.map(TurnDirection::from),
        Err(e) => {
            warn!("leg {} has an invalid turn direction: {}", row.leg_id, e);
            None
        }
    }
}

fn alt_restriction(row: &LegRow) -> AltRestriction {
    match row.alt_descriptor.as_deref() {
        Some(code) if row.altitude1 > 0.0 || row.altitude2 > 0.0 => AltRestriction {
            descriptor: AltDesc::from_code(code)
                .map(AltDescriptor::from)
                .unwrap_or(AltDescriptor::At),
            alt1: row.altitude1,
            alt2: row.altitude2,
        },
        _ => AltRestriction::default(),
    }
}

/// Resolves the fix and returns it with the magnetic variation of its navaid.
fn resolve_fix<R>(row: &FixRow, resolver: &R) -> (FixRef, Option<f32>)
where
    R: NavaidResolver + ?Sized,
{
    let kind = row.kind.as_deref().and_then(FixKind::from_code);

    let navaid = kind.and_then(|kind| resolver.resolve(kind, row.nav_id).into_iter().next());

    let mag_var = match kind {
        // runway ends have no magnetic variation
        Some(FixKind::RunwayEnd) => None,
        _ => navaid.as_ref().and_then(|n| n.mag_var),
    };

    let fix = FixRef {
        kind,
        nav_id: row.nav_id,
        ident: row.ident.clone(),
        region: row.region.clone(),
        coordinate: navaid.map(|n| n.coordinate),
    };

    (fix, mag_var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::NavaidTable;

    fn navaids() -> NavaidTable {
        let mut table = NavaidTable::new();
        table.insert(FixKind::Waypoint, 1, "ALPHA", coord!(50.0, 8.0), None);
        table.insert(FixKind::Vor, 2, "VORRR", coord!(50.5, 8.5), Some(3.0));
        table.insert(FixKind::RunwayEnd, 3, "RW25", coord!(50.1, 8.1), Some(9.0));
        table
    }

    #[test]
    fn unknown_leg_type_is_an_error() {
        let row = LegRow::new(1, "XX");
        assert!(matches!(
            build_leg(&row, &navaids()),
            Err(Error::InvalidLegType { leg_id: 1, .. })
        ));
    }

    #[test]
    fn altitude_restriction_needs_an_altitude() {
        let row = LegRow::new(1, "IF").with_altitudes("+", 0.0, 0.0);
        let leg = build_leg(&row, &navaids()).expect("leg should build");
        assert_eq!(leg.alt_restriction(), &AltRestriction::default());

        let row = LegRow::new(1, "IF").with_altitudes("B", 5000.0, 3000.0);
        let leg = build_leg(&row, &navaids()).expect("leg should build");
        assert_eq!(leg.alt_restriction().descriptor, AltDescriptor::Between);
        assert_eq!(leg.alt_restriction().alt2, 3000.0);
    }

    #[test]
    fn unknown_altitude_descriptor_is_at() {
        let row = LegRow::new(1, "IF").with_altitudes("G", 2000.0, 0.0);
        let leg = build_leg(&row, &navaids()).expect("leg should build");
        assert_eq!(leg.alt_restriction().descriptor, AltDescriptor::At);
    }

    #[test]
    fn recommended_fix_supplies_missing_mag_var() {
        let row = LegRow::new(1, "CF")
            .with_fix(FixRow::new("TW", 1, "ALPHA"))
            .with_rec_fix(FixRow::new("V", 2, "VORRR"));
        let leg = build_leg(&row, &navaids()).expect("leg should build");

        assert_eq!(leg.fix().kind, Some(FixKind::Waypoint));
        assert_eq!(leg.fix().coordinate, Some(coord!(50.0, 8.0)));
        assert_eq!(leg.mag_var(), Some(3.0));
    }

    #[test]
    fn runway_end_supplies_no_mag_var() {
        let row = LegRow::new(1, "TF").with_fix(FixRow::new("R", 3, "RW25"));
        let leg = build_leg(&row, &navaids()).expect("leg should build");

        assert!(leg.fix().coordinate.is_some());
        assert_eq!(leg.mag_var(), None);
    }

    #[test]
    fn unresolved_fix_has_no_position() {
        let row = LegRow::new(1, "TF").with_fix(FixRow::new("N", 42, "NOPE"));
        let leg = build_leg(&row, &navaids()).expect("leg should build");

        assert_eq!(leg.fix().coordinate, None);
        assert_eq!(leg.fix().ident, "NOPE");
    }

    #[test]
    fn turn_direction_is_decoded() {
        let row = LegRow::new(1, "PI").with_turn_direction("L");
        let leg = build_leg(&row, &navaids()).expect("leg should build");
        assert_eq!(leg.turn_direction(), Some(TurnDirection::Left));

        let row = LegRow::new(1, "PI").with_turn_direction("Q");
        let leg = build_leg(&row, &navaids()).expect("leg should build");
        assert_eq!(leg.turn_direction(), None);
    }
}
