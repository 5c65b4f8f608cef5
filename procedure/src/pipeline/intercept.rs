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

//! Course and heading to intercept legs.

use log::trace;

use super::diagnostic::{report, Diagnostic, DiagnosticKind};
use crate::geom::{Coordinate, Line};
use crate::leg::{Leg, LegType};
use crate::measurements::Length;

/// Length of the intercept course searched for the next leg.
const INTERCEPT_LIMIT: Length = Length::nm(200.0);

/// Accuracy of the arc intercept.
const ARC_ACCURACY: Length = Length::m(20.0);

/// Ends every intercept leg where its course meets the leg it intercepts.
///
/// An initial fix following the intercept leg is cut off and the leg after it
/// is intercepted instead.
pub(crate) fn resolve(legs: &mut [Leg], diagnostics: &mut Vec<Diagnostic>) {
    for i in 0..legs.len() {
        if !legs[i].leg_type.is_intercept() || i + 1 >= legs.len() {
            continue;
        }

        let target = if legs[i + 1].leg_type == LegType::InitialFix {
            legs[i + 1].disabled = true;
            i + 2
        } else {
            i + 1
        };

        if target >= legs.len() {
            continue;
        }

        let start = match i {
            0 => legs[i].fix.coordinate,
            _ => legs[i - 1].line.map(|line| line.pos2),
        };

        let Some(start) = start else {
            report(&legs[i], DiagnosticKind::NoIntercept, diagnostics);
            continue;
        };

        let course = legs[i].true_course();
        let next = &legs[target];
        let next_start = next.line.map(|line| line.pos1);
        let next_is_arc = next.leg_type.is_arc();

        let intersection = if next_is_arc {
            next.rec_fix.coordinate.and_then(|center| {
                let ray = Line::new(start, start.endpoint(INTERCEPT_LIMIT, course));
                ray.intersection_with_circle(&center, next.rho(), ARC_ACCURACY)
            })
        } else {
            next_start.and_then(|next_start| {
                Coordinate::intersecting_radials(&start, course, &next_start, next.true_course())
            })
        };

        let intersection = intersection.filter(|p| p.dist(&start) < INTERCEPT_LIMIT);

        match intersection {
            Some(intersection) => {
                let label = if next_is_arc {
                    format!("{}/{:.1}NM", next.rec_fix.ident, next.rho)
                } else {
                    "Leg".to_string()
                };

                let next = &mut legs[target];
                next.intercept = true;
                if let Some(line) = next.line.as_mut() {
                    line.pos1 = intersection;
                }
                let next_id = next.leg_id;

                let leg = &mut legs[i];
                leg.line = Some(Line::new(start, intersection));
                leg.display_text.push("Intercept".to_string());
                leg.display_text.push(label);

                trace!("leg {} intercepts leg {} at {}", leg.leg_id, next_id, intersection);
            }
            None => {
                report(&legs[i], DiagnosticKind::NoIntercept, diagnostics);
                legs[i].line = Some(Line::new(start, next_start.unwrap_or(start)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Angle;
    use crate::pipeline::path;

    const ALPHA: Coordinate = coord!(50.0, 8.0);

    fn leg(leg_id: i64, leg_type: LegType, fix: Option<Coordinate>, course: f32) -> Leg {
        let mut leg = Leg::new(leg_id, leg_type);
        leg.fix.coordinate = fix;
        leg.course = course;
        leg.mag_var = Some(0.0);
        leg
    }

    /// Runs the path construction and the intercept resolution.
    fn process(legs: &mut [Leg]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        path::construct(legs, &mut diagnostics);
        diagnostics.clear();
        resolve(legs, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn initial_fix_after_intercept_is_disabled() {
        // final approach course 090 from ALPHA to BRAVO
        let bravo = ALPHA.endpoint(Length::nm(20.0), Angle::t(90.0));
        let start = ALPHA
            .endpoint(Length::nm(10.0), Angle::t(90.0))
            .endpoint(Length::nm(5.0), Angle::t(180.0));

        let mut legs = vec![
            leg(1, LegType::InitialFix, Some(start), 0.0),
            leg(2, LegType::CourseToIntercept, None, 45.0),
            leg(3, LegType::InitialFix, Some(ALPHA), 0.0),
            leg(4, LegType::CourseToFix, Some(bravo), 90.0),
        ];
        legs[3].distance = 20.0;

        assert!(process(&mut legs).is_empty());

        assert!(legs[2].is_disabled());
        assert!(legs[3].is_intercept());

        let intercept = legs[1].line.expect("should have a line").pos2;
        assert_eq!(legs[3].line.map(|l| l.pos1), Some(intercept));
        assert_eq!(legs[1].line.map(|l| l.pos1), Some(start));
        assert_eq!(legs[1].display_text, vec!["Intercept", "Leg"]);

        // course 045 from 5 NM south of the final course meets it 5 NM ahead
        assert!((ALPHA.dist(&intercept).to_nm() - 15.0).abs() < 0.2);
        assert!((start.dist(&intercept).to_nm() - 7.07).abs() < 0.1);
    }

    #[test]
    fn intercepts_arc() {
        let center = ALPHA.endpoint(Length::nm(20.0), Angle::t(90.0));
        let arc_end = center.endpoint(Length::nm(10.0), Angle::t(180.0));

        let mut legs = vec![
            leg(1, LegType::InitialFix, Some(ALPHA), 0.0),
            leg(2, LegType::HeadingToIntercept, None, 90.0),
            leg(3, LegType::ArcToFix, Some(arc_end), 0.0),
        ];
        legs[2].rec_fix.coordinate = Some(center);
        legs[2].rec_fix.ident = "VOR".to_string();
        legs[2].rho = 10.0;

        assert!(process(&mut legs).is_empty());

        let intercept = legs[1].line.expect("should have a line").pos2;
        assert!((center.dist(&intercept).to_nm() - 10.0).abs() < 0.05);
        assert!((ALPHA.dist(&intercept).to_nm() - 10.0).abs() < 0.05);
        assert_eq!(legs[1].display_text, vec!["Intercept", "VOR/10.0NM"]);
    }

    #[test]
    fn missed_intercept_connects_to_next_leg() {
        let bravo = ALPHA.endpoint(Length::nm(10.0), Angle::t(0.0));
        let charlie = bravo.endpoint(Length::nm(10.0), Angle::t(0.0));

        // course away from the next leg
        let mut legs = vec![
            leg(1, LegType::InitialFix, Some(ALPHA), 0.0),
            leg(2, LegType::CourseToIntercept, None, 225.0),
            leg(3, LegType::TrackToFix, Some(bravo), 90.0),
            leg(4, LegType::TrackToFix, Some(charlie), 0.0),
        ];

        let diagnostics = process(&mut legs);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NoIntercept);
        assert_eq!(diagnostics[0].leg_id, 2);
        assert!(!legs[2].is_intercept());
        assert_eq!(
            legs[1].line.map(|l| l.pos2),
            legs[2].line.map(|l| l.pos1)
        );
    }

    #[test]
    fn intercept_as_last_leg_is_kept() {
        let mut legs = vec![
            leg(1, LegType::InitialFix, Some(ALPHA), 0.0),
            leg(2, LegType::CourseToIntercept, None, 90.0),
        ];

        let mut diagnostics = Vec::new();
        resolve(&mut legs, &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(legs[1].line, None);
    }
}
