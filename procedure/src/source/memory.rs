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

use std::collections::HashMap;

use super::LegSource;
use crate::error::Result;
use crate::leg::LegRow;

/// Legs kept in memory.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MemorySource {
    approaches: HashMap<i64, Vec<LegRow>>,
    transitions: HashMap<i64, Vec<LegRow>>,
    transition_approaches: HashMap<i64, i64>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_approach_leg(&mut self, approach_id: i64, row: LegRow) {
        Self::add_leg(self.approaches.entry(approach_id).or_default(), row);
    }

    /// Adds a leg to the transition leading to the approach.
    pub fn add_transition_leg(&mut self, approach_id: i64, transition_id: i64, row: LegRow) {
        self.transition_approaches.insert(transition_id, approach_id);
        Self::add_leg(self.transitions.entry(transition_id).or_default(), row);
    }

    fn add_leg(legs: &mut Vec<LegRow>, row: LegRow) {
        let i = legs.partition_point(|leg| leg.leg_id < row.leg_id);
        legs.insert(i, row);
    }

    fn owner(legs: &HashMap<i64, Vec<LegRow>>, leg_id: i64) -> Option<i64> {
        legs.iter()
            .find(|(_, rows)| rows.iter().any(|row| row.leg_id == leg_id))
            .map(|(id, _)| *id)
    }
}

impl LegSource for MemorySource {
    fn approach_legs(&self, approach_id: i64) -> Result<Vec<LegRow>> {
        Ok(self.approaches.get(&approach_id).cloned().unwrap_or_default())
    }

    fn transition_legs(&self, transition_id: i64) -> Result<Vec<LegRow>> {
        Ok(self
            .transitions
            .get(&transition_id)
            .cloned()
            .unwrap_or_default())
    }

    fn approach_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>> {
        Ok(Self::owner(&self.approaches, leg_id))
    }

    fn transition_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>> {
        Ok(Self::owner(&self.transitions, leg_id))
    }

    fn approach_id_for_transition(&self, transition_id: i64) -> Result<Option<i64>> {
        Ok(self.transition_approaches.get(&transition_id).copied())
    }
}
