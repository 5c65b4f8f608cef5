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

//! Path construction.
//!
//! Every leg ends at its terminus which is the fix for most legs or is
//! constructed from the course, distance and recommended fix of the leg. The
//! line of a leg runs from the terminus of the previous leg to its own.

use log::trace;

use super::diagnostic::{report, Diagnostic, DiagnosticKind};
use super::TERMINATION_LENGTH;
use crate::geom::{Coordinate, CrossTrackStatus, Line};
use crate::leg::{Leg, LegType, TurnDirection};
use crate::measurements::{Angle, Length};

/// Offset from the extended course to fix above which an intercept is
/// constructed.
const OFFSET_THRESHOLD: Length = Length::nm(1.0);

/// Angle to intercept the extended course to fix.
const INTERCEPT_ANGLE: f32 = 45.0;

/// Accuracy of the DME distance termination.
const DME_ACCURACY: Length = Length::m(10.0);

/// The state carried from one leg to the next.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub(crate) struct PathState {
    /// The terminus of the previous leg.
    pub last_pos: Option<Coordinate>,
    pub prev_type: Option<LegType>,
}

impl PathState {
    /// Constructs the line of the leg and advances to its terminus.
    ///
    /// Returns the conditions that degraded the geometry of the leg.
    pub(crate) fn step(&mut self, leg: &mut Leg) -> Vec<DiagnosticKind> {
        let mut issues = Vec::new();

        let fix = leg.fix.coordinate;
        let rec_fix = leg.rec_fix.coordinate;
        let course = leg.true_course();
        let distance = leg.distance();

        let current = match leg.leg_type {
            LegType::ArcToFix => {
                leg.display_text.push(format!(
                    "{}/{}/{}{}",
                    leg.rec_fix.ident,
                    nm_text(leg.rho()),
                    leg.theta,
                    course_ref(leg.true_course_ref)
                ));
                leg.remarks.push(format!("DME {}", nm_text(leg.rho())));
                fix
            }

            LegType::CourseToFix => {
                self.course_to_fix(leg);
                fix
            }

            LegType::DirectToFix
            | LegType::InitialFix
            | LegType::TrackToFix
            | LegType::ConstantRadiusArc => fix,

            LegType::ProcedureTurn => {
                let outbound = match leg.turn_direction {
                    Some(TurnDirection::Left) => course - INTERCEPT_ANGLE,
                    _ => course + INTERCEPT_ANGLE,
                };

                leg.procedure_turn_pos = fix.map(|f| f.endpoint(distance, outbound));
                fix
            }

            LegType::CourseToAltitude
            | LegType::FixToAltitude
            | LegType::HeadingToAltitudeTermination => {
                if self.prev_type.is_some() {
                    let start = self.last_pos.or(fix);
                    if self.last_pos.is_none() {
                        self.last_pos = start;
                    }

                    leg.display_text.push("Altitude".to_string());
                    start.map(|s| s.endpoint(TERMINATION_LENGTH, course))
                } else {
                    issues.push(DiagnosticKind::NoPreviousLeg);
                    None
                }
            }

            LegType::CourseToRadialTermination | LegType::HeadingToRadialTermination => {
                let start = self.last_pos.or(fix);
                if self.last_pos.is_none() {
                    self.last_pos = start;
                }

                let center = rec_fix.or(fix);
                let radial = Angle::t(leg.theta + leg.mag_var.unwrap_or_default());

                leg.display_text
                    .push(format!("{}/{}", leg.rec_fix.ident, leg.theta));

                let intersection = start.zip(center).and_then(|(start, center)| {
                    Coordinate::intersecting_radials(&start, course, &center, radial)
                });

                if intersection.is_none() {
                    issues.push(DiagnosticKind::NoRadialIntersection);
                }

                intersection.or(center)
            }

            LegType::TrackFromFixFromDistance => {
                if self.last_pos.is_none() {
                    self.last_pos = fix;
                }

                leg.display_text.push(format!(
                    "{}/{}/{}{}",
                    leg.fix.ident,
                    nm_text(distance),
                    leg.course,
                    course_ref(leg.true_course_ref)
                ));
                fix.map(|f| f.endpoint(distance, course))
            }

            LegType::TrackFromFixToDmeDistance
            | LegType::CourseToDmeDistance
            | LegType::HeadingToDmeDistanceTermination => {
                let start = self.last_pos.or(fix).or(rec_fix);
                let center = rec_fix.or(fix);

                if self.last_pos.is_none() {
                    self.last_pos = start;
                }

                leg.display_text.push(format!(
                    "{}/{}/{}{}",
                    leg.rec_fix.ident,
                    nm_text(distance),
                    leg.course,
                    course_ref(leg.true_course_ref)
                ));

                let intersection = start.zip(center).and_then(|(start, center)| {
                    let ray = Line::new(start, start.endpoint(distance * 2.0, course));
                    ray.intersection_with_circle(&center, distance, DME_ACCURACY)
                });

                if intersection.is_none() {
                    issues.push(DiagnosticKind::NoCircleIntersection);
                }

                intersection.or(center)
            }

            LegType::FromFixToManualTermination | LegType::HeadingToManualTermination => {
                if self.last_pos.is_none() {
                    self.last_pos = fix;
                }

                leg.display_text.push("Manual".to_string());
                fix.map(|f| f.endpoint(TERMINATION_LENGTH, course))
            }

            LegType::HoldToAltitude => {
                leg.display_text.push("Altitude".to_string());
                fix
            }

            LegType::HoldToFix => {
                leg.display_text.push("Single".to_string());
                fix
            }

            LegType::HoldToManualTermination => {
                leg.display_text.push("Manual".to_string());
                fix
            }

            // ends where the next leg is intercepted
            LegType::CourseToIntercept | LegType::HeadingToIntercept => None,
        };

        leg.line = current.map(|end| Line::new(self.last_pos.unwrap_or(end), end));

        if !leg.leg_type.is_intercept() && !leg.line.is_some_and(|line| line.is_valid()) {
            issues.push(DiagnosticKind::InvalidLine);
        }

        trace!("leg {} ({}) line {:?}", leg.leg_id, leg.leg_type, leg.line);

        self.last_pos = current;
        self.prev_type = Some(leg.leg_type);

        issues
    }

    /// Finds where the course to fix leg is intercepted if the previous leg
    /// ends away from its course.
    fn course_to_fix(&mut self, leg: &mut Leg) {
        let Some(fix) = leg.fix.coordinate else {
            return;
        };

        let course = leg.true_course();
        let extended = fix.endpoint(leg.distance(), course.opposite());

        let from_track_or_intercept = matches!(
            self.prev_type,
            Some(
                LegType::TrackFromFixFromDistance
                    | LegType::TrackFromFixToDmeDistance
                    | LegType::HeadingToIntercept
                    | LegType::CourseToIntercept
            )
        );

        if from_track_or_intercept {
            // bow to the start of the course
            if self.last_pos.map_or(true, |last| extended.dist(&last) > OFFSET_THRESHOLD) {
                self.last_pos = Some(extended);
            }
            return;
        }

        let Some(last) = self.last_pos else {
            return;
        };

        if last.dist_to_line(&extended, &fix).0 > OFFSET_THRESHOLD {
            let intersection = [course - INTERCEPT_ANGLE, course + INTERCEPT_ANGLE]
                .into_iter()
                .filter_map(|c| Coordinate::intersecting_radials(&extended, course, &last, c))
                .min_by(|a, b| a.dist(&last).to_si().total_cmp(&b.dist(&last).to_si()));

            if let Some(intersection) = intersection {
                match intersection.dist_to_line(&fix, &extended).1 {
                    CrossTrackStatus::AlongTrack => leg.intercept_pos = Some(intersection),
                    // fly direct to the fix
                    CrossTrackStatus::BeforeStart => {}
                    // fly to the start of the course
                    CrossTrackStatus::AfterEnd => self.last_pos = Some(extended),
                }
            }
        }

        if leg.intercept_pos.is_some() {
            leg.display_text.push("Intercept".to_string());
            leg.display_text.push("Course to Fix".to_string());
        }
    }
}

/// Constructs the lines of all legs.
pub(crate) fn construct(legs: &mut [Leg], diagnostics: &mut Vec<Diagnostic>) {
    let mut state = PathState::default();

    for leg in legs.iter_mut() {
        for issue in state.step(leg) {
            report(leg, issue, diagnostics);
        }
    }
}

fn nm_text(dist: Length) -> String {
    format!("{:.1}NM", dist.to_nm())
}

fn course_ref(true_course: bool) -> &'static str {
    if true_course {
        "°T"
    } else {
        "°M"
    }
}
