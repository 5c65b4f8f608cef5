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

use crate::field::check_length;
use crate::{Error, FixedField};

/// 5.20 Turn Direction (TURN DIR)
///
/// The direction of a turn to be made while flying the leg. A blank field
/// means no turn is required and is decoded as `None` by `Option<TurnDir>`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TurnDir {
    Left,
    Right,
    Either,
}

impl FixedField for TurnDir {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, Self::LENGTH)?;

        match bytes[0] {
            b'L' => Ok(Self::Left),
            b'R' => Ok(Self::Right),
            b'E' => Ok(Self::Either),
            byte => Err(Error::InvalidCharacter {
                field: "Turn Direction",
                byte,
                expected: "L, R or E",
            }),
        }
    }
}
