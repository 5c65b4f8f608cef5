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

//! Distance and course of the legs.

use super::TERMINATION_LENGTH;
use crate::leg::{Leg, LegType, TurnDirection};
use crate::measurements::{Angle, Length};

/// Calculates the flown distance and course of every leg.
///
/// The gap between the end of the previous leg and the start of a leg is
/// added to its distance unless the leg starts at an intercept.
pub(crate) fn aggregate(legs: &mut [Leg]) {
    let mut prev_end = None;

    for (i, leg) in legs.iter_mut().enumerate() {
        let (mut distance, course) = distance_and_course(leg);

        if i > 0 && !leg.intercept {
            if let (Some(end), Some(line)) = (prev_end, leg.line) {
                distance = distance + line.pos1.dist(&end);
            }
        }

        leg.calculated_distance = clamp_runaway(distance);
        leg.calculated_true_course = course;

        prev_end = leg.line.map(|line| line.pos2);
    }
}

/// Returns the distance and course of the leg's own path.
fn distance_and_course(leg: &Leg) -> (Length, Angle) {
    let Some(line) = leg.line else {
        return (Length::nm(0.0), Angle::t(0.0));
    };

    let straight = (line.dist(), line.angle());

    match leg.leg_type {
        LegType::ArcToFix | LegType::ConstantRadiusArc => match leg.rec_fix.coordinate {
            Some(center) => {
                let left = leg.turn_direction == Some(TurnDirection::Left);
                (line.arc_dist(&center, left), straight.1)
            }
            None => straight,
        },

        LegType::CourseToFix => match leg.intercept_pos {
            Some(intercept) => (
                line.pos1.dist(&intercept) + intercept.dist(&line.pos2),
                intercept.bearing(&line.pos2),
            ),
            None => straight,
        },

        LegType::ProcedureTurn => {
            let distance = leg
                .procedure_turn_pos
                .map_or(Length::nm(0.0), |pivot| line.pos1.dist(&pivot) * 2.0);

            let turn = match leg.turn_direction {
                Some(TurnDirection::Left) => -45.0,
                _ => 45.0,
            };

            (distance, leg.true_course() + turn)
        }

        LegType::CourseToAltitude
        | LegType::FixToAltitude
        | LegType::HeadingToAltitudeTermination
        | LegType::FromFixToManualTermination
        | LegType::HeadingToManualTermination => (TERMINATION_LENGTH, straight.1),

        LegType::TrackFromFixFromDistance => (leg.distance(), straight.1),

        LegType::HoldToAltitude
        | LegType::HoldToFix
        | LegType::HoldToManualTermination
        | LegType::TrackFromFixToDmeDistance
        | LegType::CourseToDmeDistance
        | LegType::HeadingToDmeDistanceTermination
        | LegType::CourseToRadialTermination
        | LegType::HeadingToRadialTermination
        | LegType::DirectToFix
        | LegType::TrackToFix
        | LegType::CourseToIntercept
        | LegType::HeadingToIntercept => straight,

        // a point without path
        LegType::InitialFix => (Length::nm(0.0), Angle::t(0.0)),
    }
}

/// Drops distances of unresolved geometry.
fn clamp_runaway(distance: Length) -> Length {
    let nm = distance.to_nm();

    if !nm.is_finite() || nm >= f32::MAX as f64 / 2.0 || nm < 0.0 {
        Length::nm(0.0)
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Coordinate, Line};

    const ALPHA: Coordinate = coord!(50.0, 8.0);

    fn leg(leg_type: LegType, line: Option<Line>) -> Leg {
        let mut leg = Leg::new(1, leg_type);
        leg.line = line;
        leg.mag_var = Some(0.0);
        leg
    }

    fn nm(value: f64) -> Length {
        Length::nm(value)
    }

    #[test]
    fn straight_leg() {
        let bravo = ALPHA.endpoint(nm(10.0), Angle::t(90.0));
        let mut legs = [leg(LegType::TrackToFix, Some(Line::new(ALPHA, bravo)))];

        aggregate(&mut legs);

        assert!((legs[0].calculated_distance.to_nm() - 10.0).abs() < 0.01);
        assert!(legs[0].calculated_true_course.diff(&Angle::t(90.0)) < 0.01);
    }

    #[test]
    fn gap_to_previous_leg_is_added() {
        let bravo = ALPHA.endpoint(nm(2.0), Angle::t(0.0));
        let charlie = bravo.endpoint(nm(10.0), Angle::t(90.0));

        let mut legs = [
            leg(LegType::InitialFix, Some(Line::new(ALPHA, ALPHA))),
            leg(LegType::TrackToFix, Some(Line::new(bravo, charlie))),
        ];

        aggregate(&mut legs);
        assert!((legs[1].calculated_distance.to_nm() - 12.0).abs() < 0.01);

        // no gap for intercepted legs
        legs[1].intercept = true;
        aggregate(&mut legs);
        assert!((legs[1].calculated_distance.to_nm() - 10.0).abs() < 0.01);
    }

    #[test]
    fn course_to_fix_via_intercept() {
        let intercept = ALPHA.endpoint(nm(3.0), Angle::t(0.0));
        let bravo = intercept.endpoint(nm(4.0), Angle::t(90.0));

        let mut legs = [leg(LegType::CourseToFix, Some(Line::new(ALPHA, bravo)))];
        legs[0].intercept_pos = Some(intercept);

        aggregate(&mut legs);

        assert!((legs[0].calculated_distance.to_nm() - 7.0).abs() < 0.01);
        assert!(legs[0].calculated_true_course.diff(&Angle::t(90.0)) < 0.01);
    }

    #[test]
    fn procedure_turn_flies_out_and_back() {
        let mut legs = [leg(LegType::ProcedureTurn, Some(Line::new(ALPHA, ALPHA)))];
        legs[0].procedure_turn_pos = Some(ALPHA.endpoint(nm(5.0), Angle::t(315.0)));
        legs[0].turn_direction = Some(TurnDirection::Left);
        legs[0].course = 360.0;
        legs[0].mag_var = Some(2.0);

        aggregate(&mut legs);

        assert!((legs[0].calculated_distance.to_nm() - 10.0).abs() < 0.01);
        assert!(legs[0].calculated_true_course.diff(&Angle::t(317.0)) < 0.01);
    }

    #[test]
    fn arc_distance_follows_turn_direction() {
        let center = ALPHA;
        let north = center.endpoint(nm(10.0), Angle::t(0.0));
        let east = center.endpoint(nm(10.0), Angle::t(90.0));

        let mut legs = [leg(LegType::ArcToFix, Some(Line::new(north, east)))];
        legs[0].rec_fix.coordinate = Some(center);
        legs[0].turn_direction = Some(TurnDirection::Right);

        aggregate(&mut legs);

        let quarter = 10.0 * std::f64::consts::FRAC_PI_2;
        assert!((legs[0].calculated_distance.to_nm() - quarter).abs() / quarter < 0.01);
    }

    #[test]
    fn terminations_without_fix_length() {
        let end = ALPHA.endpoint(nm(3.0), Angle::t(270.0));
        let mut legs = [
            leg(LegType::HeadingToManualTermination, Some(Line::new(ALPHA, end))),
            leg(LegType::TrackFromFixFromDistance, Some(Line::new(end, end))),
        ];
        legs[1].distance = 7.5;

        aggregate(&mut legs);

        assert_eq!(legs[0].calculated_distance, nm(3.0));
        assert_eq!(legs[1].calculated_distance, nm(7.5));
    }

    #[test]
    fn missing_line_has_no_distance() {
        let mut legs = [
            leg(LegType::InitialFix, Some(Line::new(ALPHA, ALPHA))),
            leg(LegType::TrackToFix, None),
        ];

        aggregate(&mut legs);

        assert_eq!(legs[1].calculated_distance, nm(0.0));
        assert_eq!(legs[1].calculated_true_course, Angle::t(0.0));
    }

    #[test]
    fn runaway_distance_is_dropped() {
        assert_eq!(clamp_runaway(nm(f64::INFINITY)), nm(0.0));
        assert_eq!(clamp_runaway(nm(f64::MAX)), nm(0.0));
        assert_eq!(clamp_runaway(nm(-1.0)), nm(0.0));
        assert_eq!(clamp_runaway(nm(12.5)), nm(12.5));
    }
}
