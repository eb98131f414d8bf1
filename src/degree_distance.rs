// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `degree_distance` module contains `DegreeDistance`: a local, linear
//! conversion between a longitude or latitude and a distance from a reference
//! position.
//!
//! The scale of a `DegreeDistance` is the geodesic length of one degree of
//! longitude (or latitude) centred on the reference position. It is a first
//! order approximation: the further a value is from the reference, the less
//! accurate the conversion. Use the `vincenty` module for distances that are
//! not local to the reference.
//!
//! At a pole one degree of longitude has (almost) no length, so the scale
//! of a longitude `DegreeDistance` is close to zero and `distance_to_degree`
//! returns very large or non finite values.

use crate::vincenty::{calculate_pair_distance, DEFAULT_TOLERANCE};
use crate::{Degrees, Ellipsoid, Error, Unit, Validate, WGS84_ELLIPSOID};
use alloc::vec::Vec;
use core::fmt;

/// Half of the span that the scale is measured over, in degrees.
const HALF_SPAN: f64 = 0.5;

/// The coordinate that a `DegreeDistance` converts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Longitude at a constant latitude: distance East of the reference.
    Longitude,
    /// Latitude at a constant longitude: distance North of the reference.
    Latitude,
}

impl Axis {
    /// The coordinates (lon1, lat1, lon2, lat2) of the span along the axis
    /// centred on the reference position.
    const fn span(self, lat: Degrees, lon: Degrees) -> (Degrees, Degrees, Degrees, Degrees) {
        match self {
            Self::Longitude => (
                Degrees(lon.0 - HALF_SPAN),
                lat,
                Degrees(lon.0 + HALF_SPAN),
                lat,
            ),
            Self::Latitude => (
                lon,
                Degrees(lat.0 - HALF_SPAN),
                lon,
                Degrees(lat.0 + HALF_SPAN),
            ),
        }
    }

    /// The coordinate of the reference position along the axis.
    const fn reference(self, lat: Degrees, lon: Degrees) -> Degrees {
        match self {
            Self::Longitude => lon,
            Self::Latitude => lat,
        }
    }
}

/// A linear conversion between degrees along an `Axis` and distance from a
/// reference position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeDistance {
    axis: Axis,
    /// The reference value of the axis coordinate.
    reference: Degrees,
    /// The distance per degree, in `unit`s.
    scale: f64,
    unit: Unit,
}

impl DegreeDistance {
    /// Constructor.
    /// * `axis` - the coordinate to convert.
    /// * `lat`, `lon` - the reference position.
    /// * `unit` - the `Unit` of the distances.
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidUnit` if `unit` is not valid.
    pub fn new(
        axis: Axis,
        lat: Degrees,
        lon: Degrees,
        unit: Unit,
        ellipsoid: &Ellipsoid,
    ) -> Result<Self, Error> {
        if !unit.is_valid() {
            return Err(Error::InvalidUnit(unit.ratio()));
        }

        let (lon1, lat1, lon2, lat2) = axis.span(lat, lon);
        let solution =
            calculate_pair_distance(lon1, lat1, lon2, lat2, DEFAULT_TOLERANCE, ellipsoid);
        Ok(Self {
            axis,
            reference: axis.reference(lat, lon),
            scale: unit.convert(solution.distance()) / (2.0 * HALF_SPAN),
            unit,
        })
    }

    /// Construct a `DegreeDistance` along the longitude `Axis` on the WGS 84
    /// ellipsoid.
    /// * `lat`, `lon` - the reference position.
    /// * `unit` - the `Unit` of the distances.
    ///
    /// # Errors
    ///
    /// `Error::InvalidUnit` if `unit` is not valid.
    ///
    /// # Examples
    /// ```
    /// use vincenty_wgs84::{DegreeDistance, Degrees, Unit};
    ///
    /// let dist2lon =
    ///     DegreeDistance::longitude(Degrees(45.0), Degrees(-120.0), Unit::Metres).unwrap();
    /// assert_eq!(-120.0, dist2lon.reference().0);
    ///
    /// // 10km East of the reference position
    /// let lon = dist2lon.distance_to_degree(10_000.0);
    /// assert!((dist2lon.degree_to_distance(lon) - 10_000.0).abs() < 1e-6);
    /// ```
    pub fn longitude(lat: Degrees, lon: Degrees, unit: Unit) -> Result<Self, Error> {
        Self::new(Axis::Longitude, lat, lon, unit, &WGS84_ELLIPSOID)
    }

    /// Construct a `DegreeDistance` along the latitude `Axis` on the WGS 84
    /// ellipsoid.
    /// * `lat`, `lon` - the reference position.
    /// * `unit` - the `Unit` of the distances.
    ///
    /// # Errors
    ///
    /// `Error::InvalidUnit` if `unit` is not valid.
    pub fn latitude(lat: Degrees, lon: Degrees, unit: Unit) -> Result<Self, Error> {
        Self::new(Axis::Latitude, lat, lon, unit, &WGS84_ELLIPSOID)
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The reference value of the axis coordinate.
    #[must_use]
    pub const fn reference(&self) -> Degrees {
        self.reference
    }

    /// The distance per degree, in `unit`s.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The distance of a coordinate from the reference.
    /// * `value` - the coordinate along the axis.
    ///
    /// returns the signed distance in `unit`s.
    #[must_use]
    pub fn degree_to_distance(&self, value: Degrees) -> f64 {
        (value.0 - self.reference.0) * self.scale
    }

    /// The coordinate at a distance from the reference.
    /// * `distance` - the signed distance in `unit`s.
    ///
    /// returns the coordinate along the axis.
    #[must_use]
    pub fn distance_to_degree(&self, distance: f64) -> Degrees {
        Degrees(self.reference.0 + distance / self.scale)
    }

    /// The distances of coordinates from the reference.
    #[must_use]
    pub fn degrees_to_distances(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .map(|&value| self.degree_to_distance(Degrees(value)))
            .collect()
    }

    /// The coordinates at distances from the reference.
    #[must_use]
    pub fn distances_to_degrees(&self, distances: &[f64]) -> Vec<f64> {
        distances
            .iter()
            .map(|&distance| self.distance_to_degree(distance).0)
            .collect()
    }
}

impl fmt::Display for DegreeDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/deg", self.scale, self.unit)
    }
}
