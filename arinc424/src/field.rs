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

use crate::Error;

/// A fixed-length field type.
///
/// This trait is implemented by all coded ARINC 424 fields. Each field is
/// decoded [`from_bytes`](FixedField::from_bytes) and owns its value since the
/// coded fields are only one or two bytes long.
pub trait FixedField: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// Parse this field from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice is too short or contains invalid data.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>;

    /// Parse this field from a string as stored in a navigation database.
    ///
    /// Database columns are usually trimmed, so a value shorter than the field
    /// length is padded with spaces before decoding.
    fn from_code(code: &str) -> Result<Self, Error> {
        let mut bytes = code.as_bytes().to_vec();
        if bytes.len() < Self::LENGTH {
            bytes.resize(Self::LENGTH, b' ');
        }
        Self::from_bytes(&bytes)
    }
}

/// Checks that `bytes` contains at least `n` bytes.
pub(crate) fn check_length(bytes: &[u8], n: usize) -> Result<(), Error> {
    if bytes.len() < n {
        Err(Error::InvalidFieldLength {
            expected: n,
            actual: bytes.len(),
        })
    } else {
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Optional Field Support
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may contain only spaces.
///
/// Allows fields to be `None` when they contain only spaces, e.g. a leg
/// without a turn direction.
impl<T> FixedField for Option<T>
where
    T: FixedField,
{
    const LENGTH: usize = T::LENGTH;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        // Check if all bytes in the field length are spaces
        if bytes
            .get(..T::LENGTH)
            .is_some_and(|b| b.iter().all(|&c| c == b' '))
        {
            Ok(None)
        } else {
            T::from_bytes(bytes).map(Some)
        }
    }
}
