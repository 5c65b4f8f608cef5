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

/// 5.29 Altitude Description (ALT DESC)
///
/// Designates whether a leg is to be crossed at, at or above, at or below or
/// between the altitudes given in the altitude fields.
///
/// Navigation databases derived from ARINC 424 often store the "at" altitude
/// with an `A` instead of the blank or `@` used by the standard. Both are
/// accepted.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AltDesc {
    /// At altitude 1.
    At,
    /// At or above altitude 1.
    AtOrAbove,
    /// At or below altitude 1.
    AtOrBelow,
    /// At or above altitude 2 and at or below altitude 1.
    Between,
}

impl FixedField for AltDesc {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, Self::LENGTH)?;

        match bytes[0] {
            b'A' | b'@' | b' ' => Ok(Self::At),
            b'+' => Ok(Self::AtOrAbove),
            b'-' => Ok(Self::AtOrBelow),
            b'B' => Ok(Self::Between),
            byte => Err(Error::InvalidCharacter {
                field: "Altitude Description",
                byte,
                expected: "A, @, +, - or B",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_at_code() {
        assert_eq!(AltDesc::from_bytes(b"A"), Ok(AltDesc::At));
    }

    #[test]
    fn parses_at_or_above() {
        assert_eq!(AltDesc::from_bytes(b"+"), Ok(AltDesc::AtOrAbove));
    }

    #[test]
    fn rejects_glide_slope_codes() {
        assert!(AltDesc::from_bytes(b"G").is_err());
    }
}
