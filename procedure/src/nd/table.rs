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

use super::{FixKind, Navaid, NavaidResolver};
use crate::geom::Coordinate;

/// In-memory navaids keyed by kind and ID.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NavaidTable {
    navaids: HashMap<(FixKind, i64), Vec<Navaid>>,
}

impl NavaidTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a navaid. Navaids added with the same kind and ID are returned in
    /// the order they were added.
    pub fn insert(
        &mut self,
        kind: FixKind,
        nav_id: i64,
        ident: impl Into<String>,
        coordinate: Coordinate,
        mag_var: Option<f32>,
    ) {
        self.navaids.entry((kind, nav_id)).or_default().push(Navaid {
            ident: ident.into(),
            coordinate,
            mag_var,
        });
    }

    pub fn len(&self) -> usize {
        self.navaids.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.navaids.is_empty()
    }
}

impl NavaidResolver for NavaidTable {
    fn resolve(&self, kind: FixKind, nav_id: i64) -> Vec<Navaid> {
        self.navaids.get(&(kind, nav_id)).cloned().unwrap_or_default()
    }
}
