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

//! Sources of procedure legs.

use crate::error::Result;
use crate::leg::LegRow;

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemorySource;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSource;

/// Reads the legs of approaches and transitions.
///
/// Legs are returned ordered by their leg ID. Unknown IDs return no legs or
/// `None` and are not an error.
pub trait LegSource {
    fn approach_legs(&self, approach_id: i64) -> Result<Vec<LegRow>>;

    fn transition_legs(&self, transition_id: i64) -> Result<Vec<LegRow>>;

    /// Returns the approach owning the approach leg.
    fn approach_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>>;

    /// Returns the transition owning the transition leg.
    fn transition_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>>;

    /// Returns the approach the transition leads to.
    fn approach_id_for_transition(&self, transition_id: i64) -> Result<Option<i64>>;
}
