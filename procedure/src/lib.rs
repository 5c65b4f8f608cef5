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

//! Flyable ground track of instrument approach procedures.
//!
//! Navigation databases describe approaches and their transitions as a
//! sequence of legs. Each leg is coded by a path terminator which defines how
//! the leg is flown, e.g. a course to a fix or a heading to an altitude. This
//! crate reconstructs the two dimensional ground track of those legs: the line
//! of every leg, intercept points, procedure turn pivots, the distance and
//! course of each leg and the region covering the whole procedure.
//!
//! Legs are read from a [`LegSource`] and their fixes are resolved by a
//! [`NavaidResolver`]. The [`ProcedureQuery`] combines both, runs the
//! [`pipeline`] and caches the resulting [`LegSequence`]s.
//!
//! # Examples
//!
//! ```
//! use procedure::leg::{FixRow, LegRow};
//! use procedure::nd::{Airport, FixKind, NavaidTable};
//! use procedure::source::MemorySource;
//! use procedure::measurements::{Angle, Length};
//! use procedure::{coord, ProcedureQuery};
//!
//! # fn main() -> procedure::Result<()> {
//! let alpha = coord!(50.0, 8.0);
//! let bravo = alpha.endpoint(Length::nm(10.0), Angle::t(90.0));
//!
//! let mut navaids = NavaidTable::new();
//! navaids.insert(FixKind::Waypoint, 1, "ALPHA", alpha, Some(0.0));
//! navaids.insert(FixKind::Waypoint, 2, "BRAVO", bravo, Some(0.0));
//!
//! let mut source = MemorySource::new();
//! source.add_approach_leg(10, LegRow::new(100, "IF").with_fix(FixRow::new("W", 1, "ALPHA")));
//! source.add_approach_leg(
//!     10,
//!     LegRow::new(101, "CF")
//!         .with_fix(FixRow::new("W", 2, "BRAVO"))
//!         .with_course(90.0)
//!         .with_distance(10.0),
//! );
//!
//! let airport = Airport::new(1, "EDXX", 0.0);
//! let mut query = ProcedureQuery::new(source, navaids);
//!
//! let legs = query.approach_legs(&airport, 10)?.expect("approach exists");
//! assert_eq!(legs.len(), 2);
//! assert!((legs.legs()[1].calculated_distance().to_nm() - 10.0).abs() < 0.1);
//! #     Ok(())
//! # }
//! ```
//!
//! [`LegSource`]: crate::source::LegSource
//! [`NavaidResolver`]: crate::nd::NavaidResolver
//! [`LegSequence`]: crate::leg::LegSequence

#[macro_use]
mod macros;

pub mod cache;
mod error;
pub mod geom;
pub mod leg;
pub mod measurements;
pub mod nd;
pub mod pipeline;
mod query;
pub mod source;

pub use error::{Error, Result};
pub use query::{LegRef, ProcedureQuery};
