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

use geo::{BoundingRect, Rect};

use super::{Coordinate, CrossTrackStatus};
use crate::measurements::{Angle, Length};

/// Upper limit of bisection steps when searching a circle intersection.
const MAX_BISECTION_STEPS: usize = 64;

/// A great circle segment from `pos1` to `pos2`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub pos1: Coordinate,
    pub pos2: Coordinate,
}

impl Line {
    pub fn new(pos1: Coordinate, pos2: Coordinate) -> Self {
        Self { pos1, pos2 }
    }

    /// Returns the length of the segment.
    pub fn dist(&self) -> Length {
        self.pos1.dist(&self.pos2)
    }

    /// Returns the initial course of the segment.
    ///
    /// A segment without length has a course of 0°.
    pub fn angle(&self) -> Angle {
        if self.is_point() {
            Angle::t(0.0)
        } else {
            self.pos1.bearing(&self.pos2)
        }
    }

    /// Returns `true` if both positions are equal.
    pub fn is_point(&self) -> bool {
        self.pos1 == self.pos2
    }

    pub fn is_valid(&self) -> bool {
        self.pos1.is_valid() && self.pos2.is_valid()
    }

    /// Returns the rectangle enclosing both positions.
    pub fn bounding_rect(&self) -> Rect<f64> {
        geo::Line::new(self.pos1, self.pos2).bounding_rect()
    }

    /// Returns the point on the segment at the `fraction` of its length.
    pub fn interpolate(&self, fraction: f64) -> Coordinate {
        if self.is_point() {
            self.pos1
        } else {
            self.pos1.endpoint(self.dist() * fraction, self.angle())
        }
    }

    /// Returns the first point where the segment crosses the circle around
    /// `center` with the `radius`.
    ///
    /// The crossing is searched by bisection until the remaining interval is
    /// shorter than the `accuracy`. Returns `None` if the segment does not
    /// cross the circle.
    pub fn intersection_with_circle(
        &self,
        center: &Coordinate,
        radius: Length,
        accuracy: Length,
    ) -> Option<Coordinate> {
        if !self.is_valid() || !center.is_valid() || self.is_point() {
            return None;
        }

        let length = self.dist().to_si();
        let radius = radius.to_si();
        let accuracy = accuracy.to_si();

        // signed distance from the circle at a fraction of the segment
        let offset = |fraction: f64| center.dist(&self.interpolate(fraction)).to_si() - radius;

        // fraction of the segment abeam the center
        let closest = match center.dist_to_line(&self.pos1, &self.pos2) {
            (_, CrossTrackStatus::BeforeStart) => 0.0,
            (_, CrossTrackStatus::AfterEnd) => 1.0,
            (cross_track, CrossTrackStatus::AlongTrack) => {
                let to_center = self.pos1.dist(center).to_si();
                let along_track = (to_center.powi(2) - cross_track.to_si().powi(2))
                    .max(0.0)
                    .sqrt();
                (along_track / length).clamp(0.0, 1.0)
            }
        };

        let entering = offset(0.0) >= 0.0;
        let (mut low, mut high) = if entering {
            if offset(closest) > 0.0 {
                return None;
            }
            (0.0, closest)
        } else {
            if offset(1.0) < 0.0 {
                return None;
            }
            (0.0, 1.0)
        };

        for _ in 0..MAX_BISECTION_STEPS {
            if (high - low) * length < accuracy {
                break;
            }

            let mid = (low + high) / 2.0;
            let outside = offset(mid) >= 0.0;

            if outside == entering {
                low = mid;
            } else {
                high = mid;
            }
        }

        Some(self.interpolate((low + high) / 2.0))
    }

    /// Returns the length of the arc from `pos1` to `pos2` around the
    /// `center`, turning left (counter-clockwise) or right (clockwise).
    pub fn arc_dist(&self, center: &Coordinate, left: bool) -> Length {
        if !center.is_valid() || self.is_point() {
            return self.dist();
        }

        let radius = (center.dist(&self.pos1) + center.dist(&self.pos2)) * 0.5;
        let start = center.bearing(&self.pos1);
        let end = center.bearing(&self.pos2);

        let sweep = if left {
            start - end.degrees()
        } else {
            end - start.degrees()
        };

        radius * sweep.to_radians()
    }
}
