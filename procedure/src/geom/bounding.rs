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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Coord, Rect};

use super::Coordinate;

/// The smallest rectangle enclosing all geometry added to it.
///
/// An empty bounding has no rectangle. Invalid coordinates are ignored.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounding {
    rect: Option<Rect<f64>>,
}

impl Bounding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the bounding to contain the coordinate.
    pub fn extend_point(&mut self, c: &Coordinate) {
        if c.is_valid() {
            self.extend_rect(&Rect::new(*c, *c));
        }
    }

    /// Extends the bounding to contain the rectangle.
    pub fn extend_rect(&mut self, other: &Rect<f64>) {
        self.rect = Some(match self.rect {
            None => *other,
            Some(rect) => Rect::new(
                Coord {
                    x: rect.min().x.min(other.min().x),
                    y: rect.min().y.min(other.min().y),
                },
                Coord {
                    x: rect.max().x.max(other.max().x),
                    y: rect.max().y.max(other.max().y),
                },
            ),
        });
    }

    /// Returns the rectangle or `None` if nothing was added.
    pub fn rect(&self) -> Option<&Rect<f64>> {
        self.rect.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// Returns `true` if the coordinate is within the bounding.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.rect.is_some_and(|rect| {
            (rect.min().x..=rect.max().x).contains(&c.longitude)
                && (rect.min().y..=rect.max().y).contains(&c.latitude)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_extended() {
        let mut bounding = Bounding::new();
        assert!(bounding.is_empty());

        bounding.extend_point(&coord!(53.0, 9.0));
        bounding.extend_point(&coord!(54.0, 10.0));

        assert!(bounding.contains(&coord!(53.5, 9.5)));
        assert!(!bounding.contains(&coord!(52.5, 9.5)));
    }

    #[test]
    fn ignores_invalid_coordinates() {
        let mut bounding = Bounding::new();
        bounding.extend_point(&Coordinate::new(f64::NAN, 9.0));
        assert!(bounding.is_empty());
    }
}
