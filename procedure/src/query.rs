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

use std::ops::Deref;
use std::rc::Rc;

use log::{debug, warn};

use crate::cache::{CacheConfig, Cached, LegHandle, LegIndex, ProcedureCache};
use crate::error::Result;
use crate::leg::{build_leg, Leg, LegRow, LegSequence, ProcedureRef};
use crate::nd::{Airport, NavaidResolver};
use crate::pipeline;
use crate::source::LegSource;

/// A leg of a cached [`LegSequence`].
///
/// The reference keeps the sequence alive even if it is evicted from the
/// cache and dereferences to the [`Leg`].
#[derive(Clone, PartialEq, Debug)]
pub struct LegRef {
    legs: Rc<LegSequence>,
    offset: usize,
}

impl LegRef {
    fn new(legs: Rc<LegSequence>, offset: usize) -> Option<Self> {
        (offset < legs.len()).then_some(Self { legs, offset })
    }

    /// The sequence containing the leg.
    pub fn sequence(&self) -> &Rc<LegSequence> {
        &self.legs
    }

    /// The position of the leg in its sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Deref for LegRef {
    type Target = Leg;

    fn deref(&self) -> &Self::Target {
        &self.legs.legs()[self.offset]
    }
}

/// Queries the processed legs of approaches and transitions.
///
/// Legs are read from the source, built with the fixes of the resolver and
/// processed by the [`pipeline`] on first access. The sequences are cached
/// afterwards and a leg index allows to find single legs. The cache is
/// transparent: an evicted sequence is rebuilt on its next access.
///
/// [`pipeline`]: crate::pipeline
pub struct ProcedureQuery<S, R> {
    source: S,
    resolver: R,
    config: CacheConfig,
    approaches: ProcedureCache,
    transitions: ProcedureCache,
    approach_index: LegIndex,
    transition_index: LegIndex,
}

impl<S, R> ProcedureQuery<S, R>
where
    S: LegSource,
    R: NavaidResolver,
{
    pub fn new(source: S, resolver: R) -> Self {
        Self::with_config(source, resolver, CacheConfig::default())
    }

    pub fn with_config(source: S, resolver: R, config: CacheConfig) -> Self {
        Self {
            source,
            resolver,
            config,
            approaches: ProcedureCache::new(config.approach_capacity),
            transitions: ProcedureCache::new(config.transition_capacity),
            approach_index: LegIndex::new(),
            transition_index: LegIndex::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn approach_cache(&self) -> &ProcedureCache {
        &self.approaches
    }

    pub fn transition_cache(&self) -> &ProcedureCache {
        &self.transitions
    }

    pub fn approach_index(&self) -> &LegIndex {
        &self.approach_index
    }

    pub fn transition_index(&self) -> &LegIndex {
        &self.transition_index
    }

    /// Replaces the source, e.g. after the database was reloaded, and returns
    /// the previous one.
    ///
    /// All cached sequences and indexed legs are dropped.
    pub fn set_source(&mut self, source: S) -> S {
        self.clear();
        std::mem::replace(&mut self.source, source)
    }

    /// Drops all cached sequences and indexed legs.
    pub fn clear(&mut self) {
        self.approaches.clear();
        self.transitions.clear();
        self.approach_index.clear();
        self.transition_index.clear();
    }

    /// Returns the legs of the approach.
    ///
    /// Returns `None` if the approach is unknown or has no legs.
    ///
    /// # Errors
    ///
    /// Returns an error if the legs can't be read from the source.
    pub fn approach_legs(
        &mut self,
        airport: &Airport,
        approach_id: i64,
    ) -> Result<Option<Rc<LegSequence>>> {
        match self.approaches.get(approach_id) {
            Cached::Populated(legs) => return Ok(Some(legs)),
            Cached::Empty => return Ok(None),
            Cached::Absent => {}
        }

        debug!("building approach {} of {}", approach_id, airport.ident);

        let mut legs = LegSequence::new(ProcedureRef {
            airport_id: airport.id,
            approach_id,
            transition_id: None,
        });

        let rows = self.source.approach_legs(approach_id)?;
        self.add_approach_legs(&rows, &mut legs);

        for (offset, leg) in legs.approach_legs().iter().enumerate() {
            self.approach_index.insert(
                leg.leg_id(),
                LegHandle {
                    procedure_id: approach_id,
                    offset,
                },
            );
        }

        Ok(self.finish(airport, legs))
    }

    /// Returns the legs of the transition followed by the legs of its
    /// approach.
    ///
    /// Returns `None` if the transition is unknown or has no legs.
    ///
    /// # Errors
    ///
    /// Returns an error if the legs can't be read from the source.
    pub fn transition_legs(
        &mut self,
        airport: &Airport,
        transition_id: i64,
    ) -> Result<Option<Rc<LegSequence>>> {
        match self.transitions.get(transition_id) {
            Cached::Populated(legs) => return Ok(Some(legs)),
            Cached::Empty => return Ok(None),
            Cached::Absent => {}
        }

        let Some(approach_id) = self.source.approach_id_for_transition(transition_id)? else {
            warn!("transition {} has no approach", transition_id);
            self.store(Some(transition_id), transition_id, None);
            return Ok(None);
        };

        debug!(
            "building transition {} of approach {} of {}",
            transition_id, approach_id, airport.ident
        );

        let mut legs = LegSequence::new(ProcedureRef {
            airport_id: airport.id,
            approach_id,
            transition_id: Some(transition_id),
        });

        for row in self.source.transition_legs(transition_id)? {
            let Some(leg) = build(&row, &self.resolver) else {
                continue;
            };

            self.transition_index.insert(
                leg.leg_id(),
                LegHandle {
                    procedure_id: transition_id,
                    offset: legs.transition_legs().len(),
                },
            );
            legs.push_transition_leg(leg);
        }

        // the approach legs are built again since the pipeline modifies them
        let rows = self.source.approach_legs(approach_id)?;
        self.add_approach_legs(&rows, &mut legs);

        Ok(self.finish(airport, legs))
    }

    /// Returns the approach leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the legs can't be read from the source.
    pub fn approach_leg(&mut self, airport: &Airport, leg_id: i64) -> Result<Option<LegRef>> {
        let leg = self.find_approach_leg(airport, leg_id)?;
        if leg.is_none() {
            warn!("approach leg with id {} not found", leg_id);
        }
        Ok(leg)
    }

    /// Returns the transition leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the legs can't be read from the source.
    pub fn transition_leg(&mut self, airport: &Airport, leg_id: i64) -> Result<Option<LegRef>> {
        let leg = self.find_transition_leg(airport, leg_id)?;
        if leg.is_none() {
            warn!("transition leg with id {} not found", leg_id);
        }
        Ok(leg)
    }

    /// Returns the approach leg or, if there is none, the transition leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the legs can't be read from the source.
    pub fn leg(&mut self, airport: &Airport, leg_id: i64) -> Result<Option<LegRef>> {
        if let Some(leg) = self.find_approach_leg(airport, leg_id)? {
            return Ok(Some(leg));
        }

        let leg = self.find_transition_leg(airport, leg_id)?;
        if leg.is_none() {
            warn!("leg with id {} not found", leg_id);
        }
        Ok(leg)
    }

    fn find_approach_leg(&mut self, airport: &Airport, leg_id: i64) -> Result<Option<LegRef>> {
        let handle = match self.approach_index.get(leg_id) {
            Some(handle) => Some(handle),
            None => match self.source.approach_id_for_leg(leg_id)? {
                Some(approach_id) => {
                    // indexes the legs of the approach
                    self.approach_legs(airport, approach_id)?;
                    self.approach_index.get(leg_id)
                }
                None => None,
            },
        };

        let Some(handle) = handle else {
            return Ok(None);
        };

        let legs = self.approach_legs(airport, handle.procedure_id)?;
        Ok(legs.and_then(|legs| LegRef::new(legs, handle.offset)))
    }

    fn find_transition_leg(&mut self, airport: &Airport, leg_id: i64) -> Result<Option<LegRef>> {
        let handle = match self.transition_index.get(leg_id) {
            Some(handle) => Some(handle),
            None => match self.source.transition_id_for_leg(leg_id)? {
                Some(transition_id) => {
                    // indexes the legs of the transition
                    self.transition_legs(airport, transition_id)?;
                    self.transition_index.get(leg_id)
                }
                None => None,
            },
        };

        let Some(handle) = handle else {
            return Ok(None);
        };

        let legs = self.transition_legs(airport, handle.procedure_id)?;
        Ok(legs.and_then(|legs| LegRef::new(legs, handle.offset)))
    }

    fn add_approach_legs(&self, rows: &[LegRow], legs: &mut LegSequence) {
        for leg in rows.iter().filter_map(|row| build(row, &self.resolver)) {
            legs.push_approach_leg(leg);
        }
    }

    /// Processes and caches the legs.
    fn finish(&mut self, airport: &Airport, mut legs: LegSequence) -> Option<Rc<LegSequence>> {
        let transition_id = legs.reference().transition_id;
        let id = transition_id.unwrap_or(legs.reference().approach_id);

        if legs.is_empty() {
            warn!("procedure {} of {} has no legs", id, airport.ident);
            self.store(transition_id, id, None);
            return None;
        }

        pipeline::process(airport, &mut legs);

        let legs = Rc::new(legs);
        self.store(transition_id, id, Some(Rc::clone(&legs)));
        Some(legs)
    }

    /// Caches the legs and drops the indexed legs of evicted procedures.
    fn store(&mut self, transition_id: Option<i64>, id: i64, legs: Option<Rc<LegSequence>>) {
        let (cache, index) = match transition_id {
            Some(_) => (&mut self.transitions, &mut self.transition_index),
            None => (&mut self.approaches, &mut self.approach_index),
        };

        for evicted in cache.insert(id, legs) {
            index.remove_procedure(evicted);
        }
    }
}

/// Builds the leg, skipping rows of unknown leg types.
fn build<R: NavaidResolver>(row: &LegRow, resolver: &R) -> Option<Leg> {
    build_leg(row, resolver)
        .inspect_err(|e| warn!("skipping leg: {}", e))
        .ok()
}
