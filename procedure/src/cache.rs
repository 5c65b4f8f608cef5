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

//! Caches of processed leg sequences.
//!
//! Approaches and transitions are cached by their ID in a [`ProcedureCache`]
//! each. A [`LegIndex`] maps the ID of a leg to the procedure owning it, so
//! that a single leg can be found without scanning the sequences.

use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::leg::LegSequence;

/// Capacities of the procedure caches.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheConfig {
    /// Number of approaches to keep.
    pub approach_capacity: usize,
    /// Number of transitions, each with its approach, to keep.
    pub transition_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            approach_capacity: 100,
            transition_capacity: 100,
        }
    }
}

/// The state of a procedure in the cache.
#[derive(Clone, PartialEq, Debug)]
pub enum Cached {
    /// The procedure was not built yet or was evicted.
    Absent,
    /// The procedure was built but has no legs.
    Empty,
    Populated(Rc<LegSequence>),
}

#[derive(Clone, Debug)]
struct Entry {
    legs: Option<Rc<LegSequence>>,
    last_accessed: u64,
}

/// Leg sequences by procedure ID, evicting the least recently used sequence
/// when the capacity is exceeded.
#[derive(Clone, Debug)]
pub struct ProcedureCache {
    capacity: usize,
    entries: HashMap<i64, Entry>,
    tick: u64,
}

impl ProcedureCache {
    /// Creates a cache of at least one entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            tick: 0,
        }
    }

    /// Returns the cached procedure and marks it as recently used.
    pub fn get(&mut self, id: i64) -> Cached {
        self.tick += 1;

        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.last_accessed = self.tick;
                match &entry.legs {
                    Some(legs) => Cached::Populated(Rc::clone(legs)),
                    None => Cached::Empty,
                }
            }
            None => Cached::Absent,
        }
    }

    /// Caches the procedure. An empty procedure is cached as [`Cached::Empty`].
    ///
    /// Returns the IDs of the procedures evicted to stay within the capacity.
    pub fn insert(&mut self, id: i64, legs: Option<Rc<LegSequence>>) -> Vec<i64> {
        self.tick += 1;

        let legs = legs.filter(|legs| !legs.is_empty());
        self.entries.insert(
            id,
            Entry {
                legs,
                last_accessed: self.tick,
            },
        );

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            match self.evict_lru() {
                Some(id) => evicted.push(id),
                None => break,
            }
        }
        evicted
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.tick = 0;
    }

    fn evict_lru(&mut self) -> Option<i64> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(id, _)| *id)?;

        trace!("evicting procedure {} from cache", oldest);
        self.entries.remove(&oldest);
        Some(oldest)
    }
}

/// Location of a leg in the sequence of its procedure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegHandle {
    /// The approach or transition owning the leg.
    pub procedure_id: i64,
    /// The position of the leg in the sequence.
    pub offset: usize,
}

/// Handles of legs by their ID.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LegIndex {
    handles: HashMap<i64, LegHandle>,
}

impl LegIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, leg_id: i64, handle: LegHandle) {
        self.handles.insert(leg_id, handle);
    }

    pub fn get(&self, leg_id: i64) -> Option<LegHandle> {
        self.handles.get(&leg_id).copied()
    }

    /// Removes the handles of all legs of the procedure.
    pub fn remove_procedure(&mut self, procedure_id: i64) {
        self.handles.retain(|_, handle| handle.procedure_id != procedure_id);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
