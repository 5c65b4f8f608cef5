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

//! ARINC 424 coded fields of terminal procedure legs.
//!
//! Navigation databases store approach and transition legs with the coded
//! [fields] of the ARINC 424 procedure records: the path terminator, the turn
//! direction and the altitude description. This crate decodes those codes into
//! typed values.
//!
//! # Examples
//!
//! Decode the path terminator of a course to fix leg:
//!
//! ```
//! use arinc424::fields::PathTerm;
//! use arinc424::FixedField;
//!
//! # fn main() -> Result<(), arinc424::Error> {
//! let term = PathTerm::from_code("CF")?;
//! assert_eq!(term, PathTerm::CourseToFix);
//! #     Ok(())
//! # }
//! ```
//!
//! [fields]: crate::fields

mod error;
mod field;

pub use field::FixedField;

pub mod fields;
pub use error::Error;
