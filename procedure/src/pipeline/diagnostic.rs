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

use std::fmt::{Display, Formatter};

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::leg::{Leg, LegType};

/// The reason why the geometry of a leg was placed degraded.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// An altitude terminated leg has no previous leg to start from.
    NoPreviousLeg,
    /// The course does not intersect the terminating radial.
    NoRadialIntersection,
    /// The course does not cross the terminating DME distance.
    NoCircleIntersection,
    /// The intercept course does not meet the next leg.
    NoIntercept,
    /// The leg has no valid line, e.g. because its fix is unresolved.
    InvalidLine,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPreviousLeg => write!(f, "no previous leg found"),
            Self::NoRadialIntersection => write!(f, "no radial intersection found"),
            Self::NoCircleIntersection => write!(f, "no circle intersection found"),
            Self::NoIntercept => write!(f, "no intercept of the next leg found"),
            Self::InvalidLine => write!(f, "invalid line"),
        }
    }
}

/// A leg whose geometry could not be constructed as coded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    pub leg_id: i64,
    pub approach_id: i64,
    pub transition_id: Option<i64>,
    pub leg_type: LegType,
    pub fix_ident: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(leg: &Leg, kind: DiagnosticKind) -> Self {
        Self {
            leg_id: leg.leg_id(),
            approach_id: leg.approach_id(),
            transition_id: leg.transition_id(),
            leg_type: leg.leg_type(),
            fix_ident: leg.fix().ident.clone(),
            kind,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "leg {} ({}) at fix {:?}: {} (approach {}",
            self.leg_id, self.leg_type, self.fix_ident, self.kind, self.approach_id
        )?;

        match self.transition_id {
            Some(id) => write!(f, ", transition {id})"),
            None => write!(f, ")"),
        }
    }
}

/// Logs the diagnostic of the leg and appends it to the `diagnostics`.
pub(crate) fn report(leg: &Leg, kind: DiagnosticKind, diagnostics: &mut Vec<Diagnostic>) {
    let diagnostic = Diagnostic::new(leg, kind);
    warn!("{}", diagnostic);
    diagnostics.push(diagnostic);
}
