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

//! Procedure legs.
//!
//! A [`Leg`] carries the attributes coded in the navigation database and the
//! geometry derived by the [`pipeline`]. Legs of an approach, optionally
//! preceded by the legs of a transition, form a [`LegSequence`].
//!
//! [`pipeline`]: crate::pipeline

use std::fmt::{Display, Formatter};

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::{Bounding, Coordinate, Line};
use crate::measurements::{Angle, Length};
use crate::nd::FixKind;
use crate::pipeline::Diagnostic;

mod builder;
mod convert;

pub use builder::{build_leg, FixRow, LegRow};

/// The path terminator of a leg.
///
/// Defines the path flown by the leg and how the leg terminates.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegType {
    ArcToFix,
    ConstantRadiusArc,
    CourseToAltitude,
    CourseToDmeDistance,
    CourseToFix,
    CourseToIntercept,
    CourseToRadialTermination,
    DirectToFix,
    FixToAltitude,
    TrackFromFixFromDistance,
    TrackFromFixToDmeDistance,
    FromFixToManualTermination,
    HoldToAltitude,
    HoldToFix,
    HoldToManualTermination,
    InitialFix,
    ProcedureTurn,
    TrackToFix,
    HeadingToAltitudeTermination,
    HeadingToDmeDistanceTermination,
    HeadingToIntercept,
    HeadingToManualTermination,
    HeadingToRadialTermination,
}

impl LegType {
    /// Returns the two letter path terminator code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArcToFix => "AF",
            Self::ConstantRadiusArc => "RF",
            Self::CourseToAltitude => "CA",
            Self::CourseToDmeDistance => "CD",
            Self::CourseToFix => "CF",
            Self::CourseToIntercept => "CI",
            Self::CourseToRadialTermination => "CR",
            Self::DirectToFix => "DF",
            Self::FixToAltitude => "FA",
            Self::TrackFromFixFromDistance => "FC",
            Self::TrackFromFixToDmeDistance => "FD",
            Self::FromFixToManualTermination => "FM",
            Self::HoldToAltitude => "HA",
            Self::HoldToFix => "HF",
            Self::HoldToManualTermination => "HM",
            Self::InitialFix => "IF",
            Self::ProcedureTurn => "PI",
            Self::TrackToFix => "TF",
            Self::HeadingToAltitudeTermination => "VA",
            Self::HeadingToDmeDistanceTermination => "VD",
            Self::HeadingToIntercept => "VI",
            Self::HeadingToManualTermination => "VM",
            Self::HeadingToRadialTermination => "VR",
        }
    }

    /// Returns `true` for legs flown along an arc around the recommended fix.
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::ArcToFix | Self::ConstantRadiusArc)
    }

    /// Returns `true` for legs that end where they intercept the next leg.
    pub fn is_intercept(&self) -> bool {
        matches!(self, Self::CourseToIntercept | Self::HeadingToIntercept)
    }

    pub fn is_altitude_termination(&self) -> bool {
        matches!(
            self,
            Self::CourseToAltitude | Self::FixToAltitude | Self::HeadingToAltitudeTermination
        )
    }

    pub fn is_manual_termination(&self) -> bool {
        matches!(
            self,
            Self::FromFixToManualTermination | Self::HeadingToManualTermination
        )
    }

    pub fn is_hold(&self) -> bool {
        matches!(
            self,
            Self::HoldToAltitude | Self::HoldToFix | Self::HoldToManualTermination
        )
    }

    /// Returns `true` for legs terminating at a DME distance.
    pub fn is_dme_termination(&self) -> bool {
        matches!(
            self,
            Self::TrackFromFixToDmeDistance
                | Self::CourseToDmeDistance
                | Self::HeadingToDmeDistanceTermination
        )
    }

    /// Returns `true` for legs terminating at a radial of the recommended fix.
    pub fn is_radial_termination(&self) -> bool {
        matches!(
            self,
            Self::CourseToRadialTermination | Self::HeadingToRadialTermination
        )
    }
}

impl Display for LegType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}

/// Describes how the altitudes of an [`AltRestriction`] apply.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltDescriptor {
    #[default]
    None,
    At,
    AtOrAbove,
    AtOrBelow,
    /// At or below `alt1` and at or above `alt2`.
    Between,
}

/// Altitude restriction of a leg in feet.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AltRestriction {
    pub descriptor: AltDescriptor,
    pub alt1: f32,
    pub alt2: f32,
}

/// Reference to a fix with its resolved position.
///
/// The `coordinate` is `None` if the fix could not be resolved.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixRef {
    pub kind: Option<FixKind>,
    pub nav_id: i64,
    pub ident: String,
    pub region: String,
    pub coordinate: Option<Coordinate>,
}

/// One leg of an approach or transition.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    pub(crate) leg_id: i64,
    pub(crate) approach_id: i64,
    pub(crate) transition_id: Option<i64>,
    pub(crate) missed: bool,
    pub(crate) leg_type: LegType,
    pub(crate) turn_direction: Option<TurnDirection>,
    pub(crate) fix: FixRef,
    pub(crate) rec_fix: FixRef,
    pub(crate) flyover: bool,
    pub(crate) true_course_ref: bool,
    pub(crate) course: f32,
    pub(crate) distance: f32,
    pub(crate) time: f32,
    pub(crate) theta: f32,
    pub(crate) rho: f32,
    pub(crate) alt_restriction: AltRestriction,
    pub(crate) mag_var: Option<f32>,

    // derived by the pipeline
    pub(crate) line: Option<Line>,
    pub(crate) intercept_pos: Option<Coordinate>,
    pub(crate) procedure_turn_pos: Option<Coordinate>,
    pub(crate) calculated_distance: Length,
    pub(crate) calculated_true_course: Angle,
    pub(crate) display_text: Vec<String>,
    pub(crate) remarks: Vec<String>,
    pub(crate) disabled: bool,
    pub(crate) intercept: bool,
}

impl Leg {
    pub(crate) fn new(leg_id: i64, leg_type: LegType) -> Self {
        Self {
            leg_id,
            approach_id: 0,
            transition_id: None,
            missed: false,
            leg_type,
            turn_direction: None,
            fix: FixRef::default(),
            rec_fix: FixRef::default(),
            flyover: false,
            true_course_ref: false,
            course: 0.0,
            distance: 0.0,
            time: 0.0,
            theta: 0.0,
            rho: 0.0,
            alt_restriction: AltRestriction::default(),
            mag_var: None,
            line: None,
            intercept_pos: None,
            procedure_turn_pos: None,
            calculated_distance: Length::nm(0.0),
            calculated_true_course: Angle::t(0.0),
            display_text: Vec::new(),
            remarks: Vec::new(),
            disabled: false,
            intercept: false,
        }
    }

    pub fn leg_id(&self) -> i64 {
        self.leg_id
    }

    pub fn approach_id(&self) -> i64 {
        self.approach_id
    }

    /// The transition of the leg or `None` for approach legs.
    pub fn transition_id(&self) -> Option<i64> {
        self.transition_id
    }

    /// Returns `true` if the leg is part of the missed approach.
    pub fn is_missed(&self) -> bool {
        self.missed
    }

    pub fn leg_type(&self) -> LegType {
        self.leg_type
    }

    pub fn turn_direction(&self) -> Option<TurnDirection> {
        self.turn_direction
    }

    pub fn fix(&self) -> &FixRef {
        &self.fix
    }

    /// The recommended fix used for radial and DME terminations and arcs.
    pub fn rec_fix(&self) -> &FixRef {
        &self.rec_fix
    }

    pub fn is_flyover(&self) -> bool {
        self.flyover
    }

    /// Returns `true` if the course is referenced to true north.
    pub fn is_true_course(&self) -> bool {
        self.true_course_ref
    }

    /// The course as coded, magnetic unless [`is_true_course`].
    ///
    /// [`is_true_course`]: Leg::is_true_course
    pub fn course(&self) -> f32 {
        self.course
    }

    /// The coded distance.
    pub fn distance(&self) -> Length {
        Length::nm(self.distance.into())
    }

    /// The coded time in minutes.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// The bearing from the recommended fix.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// The distance from the recommended fix.
    pub fn rho(&self) -> Length {
        Length::nm(self.rho.into())
    }

    pub fn alt_restriction(&self) -> &AltRestriction {
        &self.alt_restriction
    }

    /// The magnetic variation in degrees with east being positive.
    pub fn mag_var(&self) -> Option<f32> {
        self.mag_var
    }

    /// The course referenced to true north.
    ///
    /// Magnetic courses are converted with the magnetic variation of the leg.
    pub fn true_course(&self) -> Angle {
        if self.true_course_ref {
            Angle::t(self.course)
        } else {
            Angle::t(self.course + self.mag_var.unwrap_or_default())
        }
    }

    /// The line from the end of the previous leg to the end of this leg.
    pub fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }

    /// The point where a course to fix leg intercepts its course.
    pub fn intercept_pos(&self) -> Option<&Coordinate> {
        self.intercept_pos.as_ref()
    }

    /// The point where the procedure turn reverses.
    pub fn procedure_turn_pos(&self) -> Option<&Coordinate> {
        self.procedure_turn_pos.as_ref()
    }

    /// The flown distance.
    pub fn calculated_distance(&self) -> Length {
        self.calculated_distance
    }

    /// The flown course.
    pub fn calculated_true_course(&self) -> Angle {
        self.calculated_true_course
    }

    pub fn display_text(&self) -> &[String] {
        &self.display_text
    }

    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    /// Returns `true` if the leg was cut off by an intercept and is not flown.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` if the leg starts at an intercept of the previous leg.
    pub fn is_intercept(&self) -> bool {
        self.intercept
    }
}

/// Identifies an approach or one of its transitions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcedureRef {
    pub airport_id: i64,
    pub approach_id: i64,
    /// `None` if the sequence contains only the approach.
    pub transition_id: Option<i64>,
}

/// The legs of an approach, preceded by the legs of a transition if the
/// sequence references one.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegSequence {
    reference: ProcedureRef,
    legs: Vec<Leg>,
    transition_count: usize,
    bounding: Bounding,
    diagnostics: Vec<Diagnostic>,
}

impl LegSequence {
    pub fn new(reference: ProcedureRef) -> Self {
        Self {
            reference,
            ..Default::default()
        }
    }

    pub fn reference(&self) -> &ProcedureRef {
        &self.reference
    }

    /// Appends a transition leg behind the transition legs added so far.
    ///
    /// The leg is dropped if the sequence references no transition.
    pub fn push_transition_leg(&mut self, mut leg: Leg) {
        let Some(transition_id) = self.reference.transition_id else {
            warn!(
                "transition leg {} dropped from approach {} without transition",
                leg.leg_id,
                self.reference.approach_id
            );
            return;
        };

        leg.approach_id = self.reference.approach_id;
        leg.transition_id = Some(transition_id);
        self.legs.insert(self.transition_count, leg);
        self.transition_count += 1;
    }

    pub fn push_approach_leg(&mut self, mut leg: Leg) {
        leg.approach_id = self.reference.approach_id;
        leg.transition_id = None;
        self.legs.push(leg);
    }

    /// All legs in the order they are flown.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn transition_legs(&self) -> &[Leg] {
        &self.legs[..self.transition_count]
    }

    pub fn approach_legs(&self) -> &[Leg] {
        &self.legs[self.transition_count..]
    }

    pub fn get(&self, offset: usize) -> Option<&Leg> {
        self.legs.get(offset)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The region covering every fix, intercept and line of the legs.
    pub fn bounding(&self) -> &Bounding {
        &self.bounding
    }

    /// Legs whose geometry could not be constructed as coded.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn legs_mut(&mut self) -> &mut [Leg] {
        &mut self.legs
    }

    pub(crate) fn bounding_mut(&mut self) -> &mut Bounding {
        &mut self.bounding
    }

    pub(crate) fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnetic_course_is_converted() {
        let mut leg = Leg::new(1, LegType::CourseToFix);
        leg.course = 355.0;
        leg.mag_var = Some(10.0);
        assert_eq!(leg.true_course(), Angle::t(5.0));

        leg.true_course_ref = true;
        assert_eq!(leg.true_course(), Angle::t(355.0));
    }

    #[test]
    fn transition_legs_precede_approach_legs() {
        let mut legs = LegSequence::new(ProcedureRef {
            airport_id: 1,
            approach_id: 10,
            transition_id: Some(20),
        });

        legs.push_transition_leg(Leg::new(200, LegType::InitialFix));
        legs.push_approach_leg(Leg::new(100, LegType::InitialFix));
        legs.push_transition_leg(Leg::new(201, LegType::TrackToFix));

        let ids: Vec<i64> = legs.legs().iter().map(Leg::leg_id).collect();
        assert_eq!(ids, vec![200, 201, 100]);
        assert_eq!(legs.transition_legs().len(), 2);
        assert_eq!(legs.approach_legs()[0].transition_id(), None);
        assert_eq!(legs.transition_legs()[1].transition_id(), Some(20));
    }

    #[test]
    fn approach_only_sequence_has_no_transition_legs() {
        let mut legs = LegSequence::new(ProcedureRef {
            airport_id: 1,
            approach_id: 10,
            transition_id: None,
        });

        legs.push_transition_leg(Leg::new(200, LegType::InitialFix));
        assert!(legs.is_empty());
    }

    #[test]
    fn group_predicates() {
        assert!(LegType::ConstantRadiusArc.is_arc());
        assert!(LegType::HeadingToIntercept.is_intercept());
        assert!(LegType::FixToAltitude.is_altitude_termination());
        assert!(LegType::HoldToFix.is_hold());
        assert!(!LegType::TrackToFix.is_dme_termination());
        assert_eq!(LegType::ProcedureTurn.to_string(), "PI");
    }
}
