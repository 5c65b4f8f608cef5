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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The airport owning the procedures.
///
/// Legs without magnetic variation of their own use the airport's.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub id: i64,
    pub ident: String,
    /// The magnetic variation in degrees with east being positive.
    pub mag_var: f32,
}

impl Airport {
    pub fn new(id: i64, ident: impl Into<String>, mag_var: f32) -> Self {
        Self {
            id,
            ident: ident.into(),
            mag_var,
        }
    }
}
