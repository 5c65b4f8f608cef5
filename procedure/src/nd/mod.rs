// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Navigation Data.
//!
//! Procedure legs reference their fixes by a type code and a navaid ID. The
//! [`NavaidResolver`] resolves those references to positions and magnetic
//! variations. Where the navaids come from is up to the implementation, e.g.
//! the [`NavaidTable`] keeps them in memory.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

mod airport;
mod table;

pub use airport::Airport;
pub use table::NavaidTable;

/// The kind of navaid a procedure fix refers to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixKind {
    Waypoint,
    Vor,
    Ndb,
    Ils,
    RunwayEnd,
}

impl FixKind {
    /// Returns the kind of the fix type code used by the navigation database.
    ///
    /// Terminal waypoints (`TW`) and terminal NDB (`TN`) are resolved like
    /// their enroute counterparts. Returns `None` for unknown or empty codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "W" | "TW" => Some(Self::Waypoint),
            "V" => Some(Self::Vor),
            "N" | "TN" => Some(Self::Ndb),
            "L" => Some(Self::Ils),
            "R" => Some(Self::RunwayEnd),
            _ => None,
        }
    }
}

/// A navaid resolved by the [`NavaidResolver`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub ident: String,
    pub coordinate: Coordinate,
    /// The magnetic variation in degrees with east being positive.
    pub mag_var: Option<f32>,
}

/// Looks up navaids by their kind and ID.
pub trait NavaidResolver {
    /// Returns all navaids of the `kind` with the `nav_id`.
    ///
    /// The result is empty if no navaid is found. Callers use only the first
    /// match.
    fn resolve(&self, kind: FixKind, nav_id: i64) -> Vec<Navaid>;
}

impl<R: NavaidResolver + ?Sized> NavaidResolver for &R {
    fn resolve(&self, kind: FixKind, nav_id: i64) -> Vec<Navaid> {
        (**self).resolve(kind, nav_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_codes_resolve_like_enroute() {
        assert_eq!(FixKind::from_code("TW"), Some(FixKind::Waypoint));
        assert_eq!(FixKind::from_code("TN"), Some(FixKind::Ndb));
        assert_eq!(FixKind::from_code("R"), Some(FixKind::RunwayEnd));
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(FixKind::from_code(""), None);
        assert_eq!(FixKind::from_code("X"), None);
    }
}
