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

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Bearing, Destination, Distance, Geodesic};

use crate::measurements::{Angle, Length};

/// Mean earth radius in meters used for the spherical intersection math.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Position of a point relative to a line segment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrossTrackStatus {
    /// The point is abeam the segment before its start.
    BeforeStart,
    /// The point is abeam the segment between start and end.
    AlongTrack,
    /// The point is abeam the segment after its end.
    AfterEnd,
}

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the initial bearing in degrees true from this point to the
    /// `other`, normalized to 0° to 360°.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid.
    pub fn bearing(&self, other: &Coordinate) -> Angle {
        let bearing = Geodesic.bearing((*self).into(), (*other).into());
        Angle::t(bearing as f32)
    }

    /// Returns the distance from this point to the `other`.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid.
    pub fn dist(&self, other: &Coordinate) -> Length {
        Length::m(Geodesic.distance((*self).into(), (*other).into()))
    }

    /// Returns the point reached when travelling the `dist` from this point
    /// on the initial `course`.
    pub fn endpoint(&self, dist: Length, course: Angle) -> Coordinate {
        let p = Geodesic.destination((*self).into(), course.degrees() as f64, dist.to_si());
        Coordinate::from(p).normalize()
    }

    /// Wraps the longitude into -180° to 180° and clamps the latitude.
    pub fn normalize(&self) -> Coordinate {
        let mut longitude = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        if longitude == -180.0 && self.longitude > 0.0 {
            longitude = 180.0;
        }

        Coordinate {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude,
        }
    }

    /// Returns `true` if both values are finite and within their range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the intersection of the great circle through `p1` on `course1`
    /// with the great circle through `p2` on `course2`.
    ///
    /// Only the intersection in the direction of both courses is returned.
    /// Returns `None` if the radials are parallel or diverge.
    pub fn intersecting_radials(
        p1: &Coordinate,
        course1: Angle,
        p2: &Coordinate,
        course2: Angle,
    ) -> Option<Coordinate> {
        let (phi1, lambda1) = (p1.latitude.to_radians(), p1.longitude.to_radians());
        let (phi2, lambda2) = (p2.latitude.to_radians(), p2.longitude.to_radians());
        let theta13 = course1.to_radians();
        let theta23 = course2.to_radians();

        let d_phi = phi2 - phi1;
        let d_lambda = lambda2 - lambda1;

        // angular distance between both points
        let delta12 = 2.0
            * ((d_phi / 2.0).sin().powi(2)
                + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
            .sqrt()
            .asin();

        if delta12.abs() < f64::EPSILON {
            return Some(*p1);
        }

        let cos_theta_a =
            (phi2.sin() - phi1.sin() * delta12.cos()) / (delta12.sin() * phi1.cos());
        let cos_theta_b =
            (phi1.sin() - phi2.sin() * delta12.cos()) / (delta12.sin() * phi2.cos());
        let theta_a = cos_theta_a.clamp(-1.0, 1.0).acos();
        let theta_b = cos_theta_b.clamp(-1.0, 1.0).acos();

        let (theta12, theta21) = if d_lambda.sin() > 0.0 {
            (theta_a, 2.0 * PI - theta_b)
        } else {
            (2.0 * PI - theta_a, theta_b)
        };

        let alpha1 = theta13 - theta12;
        let alpha2 = theta21 - theta23;

        if alpha1.sin() == 0.0 && alpha2.sin() == 0.0 {
            // infinite intersections
            return None;
        }

        if alpha1.sin() * alpha2.sin() < 0.0 {
            // ambiguous intersection, the radials diverge
            return None;
        }

        let alpha3 =
            (-alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos()).acos();
        let delta13 = (delta12.sin() * alpha1.sin() * alpha2.sin())
            .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());

        let phi3 = (phi1.sin() * delta13.cos() + phi1.cos() * delta13.sin() * theta13.cos()).asin();
        let d_lambda13 = (theta13.sin() * delta13.sin() * phi1.cos())
            .atan2(delta13.cos() - phi1.sin() * phi3.sin());
        let lambda3 = lambda1 + d_lambda13;

        let intersection = Coordinate::new(phi3.to_degrees(), lambda3.to_degrees()).normalize();
        intersection.is_valid().then_some(intersection)
    }

    /// Returns the distance from this point to the segment between `pos1` and
    /// `pos2` and where this point is abeam the segment.
    ///
    /// The distance is the cross track distance if this point is abeam the
    /// segment and the distance to the closest end otherwise.
    pub fn dist_to_line(
        &self,
        pos1: &Coordinate,
        pos2: &Coordinate,
    ) -> (Length, CrossTrackStatus) {
        let length = pos1.dist(pos2).to_si();
        let delta13 = pos1.dist(self).to_si() / EARTH_RADIUS;

        if length < f64::EPSILON {
            return (pos1.dist(self), CrossTrackStatus::AlongTrack);
        }

        let theta13 = pos1.bearing(self).to_radians();
        let theta12 = pos1.bearing(pos2).to_radians();

        let cross_track = (delta13.sin() * (theta13 - theta12).sin())
            .clamp(-1.0, 1.0)
            .asin();
        let along_track = (delta13.cos() / cross_track.cos())
            .clamp(-1.0, 1.0)
            .acos()
            * (theta13 - theta12).cos().signum()
            * EARTH_RADIUS;

        if along_track < 0.0 {
            (pos1.dist(self), CrossTrackStatus::BeforeStart)
        } else if along_track > length {
            (pos2.dist(self), CrossTrackStatus::AfterEnd)
        } else {
            (
                Length::m((cross_track * EARTH_RADIUS).abs()),
                CrossTrackStatus::AlongTrack,
            )
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::{Angle, Length};

    // As benchmark for our testing we use the directions to an airfield as
    // published in the German AIP. The airfield Hungriger Wolf in Itzehoe
    // (EDHF) has two directions from two VOR published in its visual operation
    // chart (25 JUL 2024).

    // Helgoland VOR
    const DHE: Coordinate = coord!(54.18568611, 7.91070000);
    // Itzehoe Hungriger Wolf
    const EDHF: Coordinate = coord!(53.99250000, 9.57666667);

    #[test]
    fn bearing() {
        // From the AIP we get a magnetic heading from the Helgoland VOR (DHE)
        // to EDHF of 97°. With a magnetic variation of 4° east in EDHF, we get
        // a true bearing of approximately 101°. The geodesic calculation on the
        // WGS84 ellipsoid gives a more precise result of ~100°.
        assert_eq!(DHE.bearing(&EDHF).degrees().round(), 100.0);
    }

    #[test]
    fn dist() {
        // the AIP provides only rounded values
        assert_eq!(DHE.dist(&EDHF).to_nm().round(), 60.0);
    }

    #[test]
    fn endpoint_travels_distance_and_course() {
        let end = EDHF.endpoint(Length::nm(10.0), Angle::t(90.0));
        assert!((EDHF.dist(&end).to_nm() - 10.0).abs() < 0.01);
        assert!(EDHF.bearing(&end).diff(&Angle::t(90.0)) < 0.2);
    }

    #[test]
    fn normalize_wraps_longitude() {
        let c = Coordinate::new(10.0, 190.0).normalize();
        assert!((c.longitude + 170.0).abs() < 1e-9);
    }

    #[test]
    fn radials_intersect() {
        // A radial due east from (0, 0) and a radial due south from (1, 1)
        // meet near (0, 1).
        let p1 = coord!(0.0, 0.0);
        let p2 = coord!(1.0, 1.0);
        let i = Coordinate::intersecting_radials(&p1, Angle::t(90.0), &p2, Angle::t(180.0))
            .expect("radials should intersect");

        assert!(i.latitude.abs() < 1e-6);
        assert!((i.longitude - 1.0).abs() < 1e-6);
    }

    #[test]
    fn diverging_radials_do_not_intersect() {
        let p1 = coord!(0.0, 0.0);
        let p2 = coord!(1.0, 1.0);
        assert!(Coordinate::intersecting_radials(&p1, Angle::t(90.0), &p2, Angle::t(0.0)).is_none());
    }

    #[test]
    fn cross_track_status() {
        let pos1 = coord!(0.0, 0.0);
        let pos2 = coord!(0.0, 1.0);

        let (dist, status) = coord!(0.1, 0.5).dist_to_line(&pos1, &pos2);
        assert_eq!(status, CrossTrackStatus::AlongTrack);
        assert!((dist.to_nm() - 6.0).abs() < 0.1);

        let (_, status) = coord!(0.1, -0.5).dist_to_line(&pos1, &pos2);
        assert_eq!(status, CrossTrackStatus::BeforeStart);

        let (_, status) = coord!(0.1, 1.5).dist_to_line(&pos1, &pos2);
        assert_eq!(status, CrossTrackStatus::AfterEnd);
    }
}
