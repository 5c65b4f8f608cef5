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

use std::rc::Rc;

use procedure::cache::CacheConfig;
use procedure::geom::Coordinate;
use procedure::leg::{FixRow, LegRow, LegSequence, LegType};
use procedure::measurements::{Angle, Length};
use procedure::nd::{Airport, FixKind, NavaidTable};
use procedure::source::{LegSource, MemorySource};
use procedure::{coord, ProcedureQuery};

const APPROACH: i64 = 10;
const OTHER_APPROACH: i64 = 20;
const TRANSITION: i64 = 30;

// Final approach course 090 from ALPHA to BRAVO. The transition starts 5 NM
// south of ALPHA and intercepts the final course on 045.
const ALPHA: Coordinate = coord!(50.0, 8.0);

fn bravo() -> Coordinate {
    ALPHA.endpoint(Length::nm(10.0), Angle::t(90.0))
}

fn start() -> Coordinate {
    ALPHA.endpoint(Length::nm(5.0), Angle::t(180.0))
}

fn vor() -> Coordinate {
    ALPHA.endpoint(Length::nm(20.0), Angle::t(0.0))
}

fn airport() -> Airport {
    Airport::new(1, "EDXX", 2.0)
}

fn navaids() -> NavaidTable {
    let mut navaids = NavaidTable::new();
    navaids.insert(FixKind::Waypoint, 1, "ALPHA", ALPHA, Some(0.0));
    navaids.insert(FixKind::Waypoint, 2, "BRAVO", bravo(), Some(0.0));
    navaids.insert(FixKind::Waypoint, 3, "START", start(), None);
    navaids.insert(FixKind::Vor, 4, "VOR", vor(), Some(0.0));
    navaids
}

fn source() -> MemorySource {
    let mut source = MemorySource::new();

    source.add_approach_leg(
        APPROACH,
        LegRow::new(100, "IF").with_fix(FixRow::new("W", 1, "ALPHA")),
    );
    source.add_approach_leg(
        APPROACH,
        LegRow::new(101, "CF")
            .with_fix(FixRow::new("W", 2, "BRAVO"))
            .with_course(90.0)
            .with_distance(10.0)
            .with_altitudes("+", 2000.0, 0.0),
    );

    source.add_approach_leg(
        OTHER_APPROACH,
        LegRow::new(200, "IF").with_fix(FixRow::new("V", 4, "VOR")),
    );
    source.add_approach_leg(
        OTHER_APPROACH,
        LegRow::new(201, "PI")
            .with_fix(FixRow::new("V", 4, "VOR"))
            .with_course(360.0)
            .with_distance(5.0)
            .with_turn_direction("L"),
    );

    source.add_transition_leg(
        APPROACH,
        TRANSITION,
        LegRow::new(300, "IF").with_fix(FixRow::new("TW", 3, "START")),
    );
    source.add_transition_leg(
        APPROACH,
        TRANSITION,
        LegRow::new(301, "CI").with_course(43.0),
    );

    source
}

fn query() -> ProcedureQuery<MemorySource, NavaidTable> {
    ProcedureQuery::new(source(), navaids())
}

/// Asserts that every leg starts where the previous flown leg ends.
fn assert_continuous(legs: &LegSequence) {
    let flown: Vec<_> = legs.legs().iter().filter(|leg| !leg.is_disabled()).collect();

    for pair in flown.windows(2) {
        let prev_end = pair[0].line().map(|line| line.pos2);
        assert_eq!(
            pair[1].line().map(|line| line.pos1),
            prev_end,
            "leg {} should start at the end of leg {}",
            pair[1].leg_id(),
            pair[0].leg_id()
        );
    }
}

#[test]
fn initial_fix_and_course_to_fix() {
    let mut query = query();
    let legs = query
        .approach_legs(&airport(), APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    assert_eq!(legs.len(), 2);
    assert!(legs.transition_legs().is_empty());

    let course = &legs.legs()[1];
    assert_eq!(course.leg_type(), LegType::CourseToFix);
    assert!((course.calculated_distance().to_nm() - 10.0).abs() < 0.1);
    assert!(course.calculated_true_course().diff(&Angle::t(90.0)) < 0.5);
    assert_eq!(course.intercept_pos(), None);
    assert_eq!(course.alt_restriction().alt1, 2000.0);

    assert!(legs.diagnostics().is_empty());
    assert!(legs.bounding().contains(&ALPHA));
    assert!(legs.bounding().contains(&bravo()));
    assert_continuous(&legs);
}

#[test]
fn procedure_turn() {
    let mut query = query();
    let legs = query
        .approach_legs(&airport(), OTHER_APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    let vor = vor();
    let turn = &legs.legs()[1];
    let pivot = turn.procedure_turn_pos().expect("should have a pivot");

    // 360° magnetic with the VOR's variation of 0°
    assert!((vor.dist(pivot).to_nm() - 5.0).abs() < 0.01);
    assert!(vor.bearing(pivot).diff(&Angle::t(315.0)) < 0.1);
    assert!(turn.calculated_true_course().diff(&Angle::t(315.0)) < 0.01);
    assert!((turn.calculated_distance().to_nm() - 10.0).abs() < 0.01);
}

#[test]
fn transition_intercepts_final_course() {
    let mut query = query();
    let legs = query
        .transition_legs(&airport(), TRANSITION)
        .expect("source should not fail")
        .expect("transition should exist");

    assert_eq!(legs.reference().approach_id, APPROACH);
    assert_eq!(legs.reference().transition_id, Some(TRANSITION));

    let ids: Vec<i64> = legs.legs().iter().map(|leg| leg.leg_id()).collect();
    assert_eq!(ids, vec![300, 301, 100, 101]);
    assert_eq!(legs.transition_legs().len(), 2);
    assert_eq!(legs.approach_legs().len(), 2);

    let intercept = &legs.legs()[1];
    let initial = &legs.legs()[2];
    let course = &legs.legs()[3];

    assert!(initial.is_disabled());
    assert!(course.is_intercept());
    assert_eq!(intercept.display_text(), ["Intercept", "Leg"]);

    // the start has no variation of its own and takes the airport's
    assert_eq!(legs.legs()[0].mag_var(), Some(2.0));

    // 043° magnetic is 045° true, meeting the final course 5 NM past ALPHA
    let end = intercept.line().expect("should have a line").pos2;
    assert!((ALPHA.dist(&end).to_nm() - 5.0).abs() < 0.2);
    assert!((intercept.calculated_distance().to_nm() - 7.07).abs() < 0.1);
    assert!((course.calculated_distance().to_nm() - 5.0).abs() < 0.2);

    assert!(legs.diagnostics().is_empty());
    assert!(legs.bounding().contains(&start()));
    assert_continuous(&legs);
}

#[test]
fn approach_in_transition_is_built_separately() {
    let mut query = query();
    let airport = airport();

    let transition = query
        .transition_legs(&airport, TRANSITION)
        .expect("source should not fail")
        .expect("transition should exist");
    let approach = query
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    // the transition cut off the initial fix of its copy only
    assert!(transition.approach_legs()[0].is_disabled());
    assert!(!approach.legs()[0].is_disabled());
}

#[test]
fn unknown_leg_is_not_found() {
    let mut query = query();
    let airport = airport();

    assert_eq!(query.leg(&airport, 999).expect("source should not fail"), None);
    assert_eq!(
        query
            .approach_leg(&airport, 999)
            .expect("source should not fail"),
        None
    );
    assert_eq!(
        query
            .transition_leg(&airport, 999)
            .expect("source should not fail"),
        None
    );
    assert_eq!(
        query
            .approach_legs(&airport, 999)
            .expect("source should not fail"),
        None
    );
}

#[test]
fn single_legs_are_found() {
    let mut query = query();
    let airport = airport();

    let leg = query
        .approach_leg(&airport, 101)
        .expect("source should not fail")
        .expect("leg should exist");
    assert_eq!(leg.leg_id(), 101);
    assert_eq!(leg.offset(), 1);
    assert_eq!(leg.transition_id(), None);

    let leg = query
        .transition_leg(&airport, 301)
        .expect("source should not fail")
        .expect("leg should exist");
    assert_eq!(leg.leg_id(), 301);
    assert_eq!(leg.transition_id(), Some(TRANSITION));
    assert_eq!(leg.sequence().reference().transition_id, Some(TRANSITION));

    // approach legs are searched first
    let leg = query
        .leg(&airport, 300)
        .expect("source should not fail")
        .expect("leg should exist");
    assert_eq!(leg.leg_type(), LegType::InitialFix);
    assert_eq!(leg.transition_id(), Some(TRANSITION));
}

#[test]
fn cache_does_not_change_results() {
    let airport = airport();

    let mut cached = query();
    let cold = cached
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");
    let warm = cached
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    assert!(Rc::ptr_eq(&cold, &warm));

    let rebuilt = query()
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    assert!(!Rc::ptr_eq(&cold, &rebuilt));
    assert_eq!(*cold, *rebuilt);
}

#[test]
fn evicted_legs_are_rebuilt() {
    let airport = airport();
    let config = CacheConfig {
        approach_capacity: 1,
        transition_capacity: 1,
    };
    let mut query = ProcedureQuery::with_config(source(), navaids(), config);

    let first = query
        .approach_leg(&airport, 101)
        .expect("source should not fail")
        .expect("leg should exist");

    query
        .approach_legs(&airport, OTHER_APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");
    assert!(!query.approach_cache().contains(APPROACH));

    // the evicted sequence is kept alive by the reference
    assert_eq!(first.leg_id(), 101);

    let again = query
        .approach_leg(&airport, 101)
        .expect("source should not fail")
        .expect("leg should exist");

    assert!(query.approach_cache().contains(APPROACH));
    assert!(!Rc::ptr_eq(first.sequence(), again.sequence()));
    assert_eq!(*first, *again);
}

#[test]
fn evicted_legs_are_dropped_from_index() {
    let airport = airport();
    let config = CacheConfig {
        approach_capacity: 1,
        transition_capacity: 1,
    };
    let mut query = ProcedureQuery::with_config(source(), navaids(), config);

    query
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");
    assert!(query.approach_index().get(101).is_some());

    query
        .approach_legs(&airport, OTHER_APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    assert_eq!(query.approach_index().len(), 2);
    assert_eq!(query.approach_index().get(100), None);
    assert_eq!(query.approach_index().get(101), None);
    assert_eq!(
        query.approach_index().get(201).map(|h| h.procedure_id),
        Some(OTHER_APPROACH)
    );

    // the approach legs of a transition are only indexed with the approach
    query
        .transition_legs(&airport, TRANSITION)
        .expect("source should not fail")
        .expect("transition should exist");
    assert_eq!(query.approach_index().len(), 2);
    assert_eq!(query.transition_index().len(), 2);
}

#[test]
fn empty_approach_is_cached() {
    let mut source = source();
    source.add_approach_leg(40, LegRow::new(400, "XX"));

    let mut query = ProcedureQuery::new(source, navaids());
    let airport = airport();

    // the only leg has an unknown type and is skipped
    assert_eq!(
        query.approach_legs(&airport, 40).expect("source should not fail"),
        None
    );
    assert!(query.approach_cache().contains(40));
    assert_eq!(
        query.approach_legs(&airport, 40).expect("source should not fail"),
        None
    );
}

#[test]
fn new_source_drops_cached_legs() {
    let airport = airport();
    let mut query = query();

    query
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");

    let mut reloaded = MemorySource::new();
    reloaded.add_approach_leg(
        APPROACH,
        LegRow::new(500, "IF").with_fix(FixRow::new("W", 2, "BRAVO")),
    );
    let previous = query.set_source(reloaded);

    assert_eq!(previous.approach_legs(APPROACH).map(|rows| rows.len()), Ok(2));
    assert!(query.approach_cache().is_empty());

    let legs = query
        .approach_legs(&airport, APPROACH)
        .expect("source should not fail")
        .expect("approach should exist");
    assert_eq!(legs.len(), 1);
    assert_eq!(legs.legs()[0].leg_id(), 500);

    assert_eq!(
        query
            .approach_leg(&airport, 101)
            .expect("source should not fail"),
        None
    );
}
