// Copyright (c) 2024-2026 Ken Barker

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

//! vincenty-wgs84
//!
//! A library for calculating geodesic distances on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae),
//! and local linear conversions between degrees and distances.
//!
//! ## Geodesic distance
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! Vincenty's inverse method calculates its length by iterating the
//! longitude difference on an auxiliary sphere.
//!
//! The `vincenty` module calculates the distances between batches of pairs
//! of points given as slices of longitudes and latitudes in degrees.
//! Pairs of identical points have a distance of zero.
//! The iteration is capped at ten iterations: Vincenty's method does not
//! converge for nearly antipodal points, in which case the last estimate is
//! returned, see `vincenty::calculate_distances_with_status`.
//!
//! Distances are returned in a `Unit`: metres, kilometres, miles,
//! nautical miles or a custom ratio to metres.
//!
//! ## Distance per degree
//!
//! A `DegreeDistance` converts between longitude (or latitude) and the
//! distance from a reference position using the geodesic length of one degree
//! centred on the reference. It is a linear approximation, only accurate near
//! the reference position.
//!
//! ## Design
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution.
//! The `WGS84_ELLIPSOID` constant represents the WGS-84 `Ellipsoid` which is
//! used by `geodesic_distance` and the `DegreeDistance` constructors.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles`;
//! - [libm](https://crates.io/crates/libm) - to perform trigonometric calculations;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications. It requires `alloc` for the
//! distances of a batch.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod degree_distance;
pub mod ellipsoid;
pub mod error;
pub mod unit;
pub mod vincenty;

pub use angle_sc::{Degrees, Radians, Validate};
pub use degree_distance::{Axis, DegreeDistance};
pub use error::Error;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit::Unit;
pub use unit_sphere::LatLong;

use alloc::vec::Vec;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub const fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }
}

/// The WGS-84 `Ellipsoid`.
pub const WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();

/// Calculate the geodesic distances between pairs of points on the WGS-84
/// ellipsoid, to the default tolerance.
/// * `lon1`, `lat1` - the start points in degrees.
/// * `lon2`, `lat2` - the finish points in degrees.
/// * `unit` - the `Unit` of the distances.
///
/// returns the distances between the pairs of points.
///
/// # Errors
///
/// `Error::LengthMismatch` if the coordinates are not all the same length,
/// `Error::InvalidUnit` if `unit` is not valid.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// // Istanbul to Washington
/// let distances =
///     geodesic_distance(&[29.0], &[42.0], &[-77.0], &[39.0], Unit::NauticalMiles).unwrap();
/// println!("Istanbul-Washington distance: {:?} NM", distances[0]);
/// assert!((distances[0] - 4503.166).abs() < 1e-3);
/// ```
pub fn geodesic_distance(
    lon1: &[f64],
    lat1: &[f64],
    lon2: &[f64],
    lat2: &[f64],
    unit: Unit,
) -> Result<Vec<f64>, Error> {
    vincenty::calculate_distances(
        lon1,
        lat1,
        lon2,
        lat2,
        unit,
        vincenty::DEFAULT_TOLERANCE,
        &WGS84_ELLIPSOID,
    )
}

/// Calculate the geodesic length (in metres) between a pair of positions
/// on the ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `tolerance` - the tolerance to perform the calculation to.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the length of the geodesic on the ellipsoid in metres, the last
/// estimate if the calculation did not converge.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
/// use vincenty_wgs84::vincenty::DEFAULT_TOLERANCE;
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let length =
///     calculate_geodesic_distance(&istanbul, &washington, DEFAULT_TOLERANCE, &WGS84_ELLIPSOID);
///
/// let distance_nm = NauticalMiles::from(length);
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
/// ```
#[must_use]
pub fn calculate_geodesic_distance(
    a: &LatLong,
    b: &LatLong,
    tolerance: Radians,
    ellipsoid: &Ellipsoid,
) -> Metres {
    vincenty::calculate_distance(a, b, tolerance, ellipsoid).distance()
}
