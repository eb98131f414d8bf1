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

//! The vincenty module contains functions for calculating the geodesic
//! distance between pairs of points on the surface of an ellipsoid using
//! Vincenty's inverse method.
//!
//! T Vincenty, [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, 1975.
//!
//! The method iterates the longitude difference on the auxiliary sphere,
//! `lambda`, until it changes by less than a tolerance. The number of
//! iterations is capped at `MAX_ITERATIONS`: the method does not converge
//! for nearly antipodal points, in which case the last estimate is returned.
//!
//! A batch of pairs is solved together: every pair is iterated until the
//! largest change in `lambda` across the batch is within the tolerance.
//! Pairs of identical points are not iterated, their distance is zero.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

use crate::ellipsoid::calculate_reduced_latitude;
use crate::ellipsoid::coefficients::{
    calculate_cos_2sigma_m, calculate_delta_sigma, calculate_lambda, evaluate_a, evaluate_b,
    evaluate_c,
};
use crate::{Degrees, Ellipsoid, Error, LatLong, Metres, Radians, Unit, Validate};
use alloc::vec;
use alloc::vec::Vec;

/// The maximum number of iterations of `lambda`.
pub const MAX_ITERATIONS: u32 = 10;

/// The default convergence tolerance of `lambda`, approximately 0.06mm.
pub const DEFAULT_TOLERANCE: Radians = Radians(1e-12);

/// The geodesic distance between a pair of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// The length of the geodesic in metres.
    distance: Metres,
    /// The number of iterations performed.
    iterations: u32,
    /// Whether `lambda` converged within the tolerance.
    converged: bool,
}

impl Solution {
    /// The length of the geodesic in metres.
    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    /// The number of iterations performed.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether `lambda` converged within the tolerance.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }
}

/// The geodesic distances between a batch of pairs of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Distances {
    /// The distances in the requested `Unit`.
    values: Vec<f64>,
    /// Whether each distance converged within the tolerance.
    converged: Vec<bool>,
    /// The number of iterations performed on the batch.
    iterations: u32,
}

impl Distances {
    /// The distances in the requested `Unit`, in the order of the points.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Whether each distance converged within the tolerance.
    /// Pairs of identical points are always converged.
    #[must_use]
    pub fn converged(&self) -> &[bool] {
        &self.converged
    }

    /// The number of iterations performed on the batch.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether every distance converged within the tolerance.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.converged.iter().all(|&converged| converged)
    }

    /// Take the distances.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// A pair of points on the auxiliary sphere and the state of the `lambda`
/// iteration between them.
#[derive(Clone, Copy, Debug, Default)]
struct AuxiliaryPair {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
    /// The longitude difference on the ellipsoid.
    l: f64,
    /// The longitude difference on the auxiliary sphere.
    lambda: f64,
    /// The change to `lambda` made by the last iteration.
    delta_lambda: f64,

    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    sq_cos_alpha: f64,
    cos_2sigma_m: f64,
}

impl AuxiliaryPair {
    /// Construct an `AuxiliaryPair` from geodetic coordinates in degrees.
    fn new(lon1: f64, lat1: f64, lon2: f64, lat2: f64, one_minus_f: f64) -> Self {
        let (sin_u1, cos_u1) = calculate_reduced_latitude(Radians(lat1.to_radians()), one_minus_f);
        let (sin_u2, cos_u2) = calculate_reduced_latitude(Radians(lat2.to_radians()), one_minus_f);
        let l = lon2.to_radians() - lon1.to_radians();
        Self {
            sin_u1,
            cos_u1,
            sin_u2,
            cos_u2,
            l,
            lambda: l,
            delta_lambda: f64::INFINITY,
            ..Self::default()
        }
    }

    /// Calculate the arc on the auxiliary sphere for the current `lambda`
    /// and refine `lambda`.
    /// * `f` - the flattening ratio.
    ///
    /// returns the absolute change in `lambda`.
    fn iterate(&mut self, f: f64) -> f64 {
        let sin_lambda = libm::sin(self.lambda);
        let cos_lambda = libm::cos(self.lambda);

        let x = self.cos_u2 * sin_lambda;
        let y = self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * cos_lambda;
        self.sin_sigma = libm::sqrt(x * x + y * y);
        self.cos_sigma = self.sin_u1 * self.sin_u2 + self.cos_u1 * self.cos_u2 * cos_lambda;
        self.sigma = libm::atan2(self.sin_sigma, self.cos_sigma);

        let sin_alpha = self.cos_u1 * self.cos_u2 * sin_lambda / self.sin_sigma;
        self.sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;
        self.cos_2sigma_m =
            calculate_cos_2sigma_m(self.cos_sigma, self.sin_u1, self.sin_u2, self.sq_cos_alpha);

        let c = evaluate_c(f, self.sq_cos_alpha);
        let lambda = calculate_lambda(
            self.l,
            f,
            c,
            sin_alpha,
            self.sigma,
            self.sin_sigma,
            self.cos_sigma,
            self.cos_2sigma_m,
        );
        self.delta_lambda = libm::fabs(lambda - self.lambda);
        self.lambda = lambda;
        self.delta_lambda
    }

    /// Whether the last iteration changed `lambda` by less than `tolerance`.
    fn is_converged(&self, tolerance: Radians) -> bool {
        self.delta_lambda < tolerance.0
    }

    /// The length of the geodesic on the ellipsoid from the last iteration.
    fn length(&self, ellipsoid: &Ellipsoid) -> Metres {
        let u_2 = self.sq_cos_alpha * ellipsoid.ep_2();
        let a = evaluate_a(u_2);
        let b = evaluate_b(u_2);
        let delta_sigma =
            calculate_delta_sigma(b, self.sin_sigma, self.cos_sigma, self.cos_2sigma_m);
        Metres(ellipsoid.b().0 * a * (self.sigma - delta_sigma))
    }
}

/// Iterate `lambda` for every pair until the largest change is less than
/// `tolerance` or `MAX_ITERATIONS` have been performed.
///
/// returns the number of iterations performed.
fn solve(pairs: &mut [AuxiliaryPair], tolerance: Radians, ellipsoid: &Ellipsoid) -> u32 {
    let f = ellipsoid.f();

    let mut iterations = 0;
    while !pairs.is_empty() && iterations < MAX_ITERATIONS {
        iterations += 1;
        let max_delta = pairs
            .iter_mut()
            .fold(0.0, |max_delta, pair| libm::fmax(max_delta, pair.iterate(f)));
        if max_delta < tolerance.0 {
            break;
        }
    }

    iterations
}

/// Check the arguments of a batch calculation.
fn validate_arguments(
    lon1: &[f64],
    lat1: &[f64],
    lon2: &[f64],
    lat2: &[f64],
    unit: Unit,
    tolerance: Radians,
) -> Result<(), Error> {
    let length = lon1.len();
    if lat1.len() != length || lon2.len() != length || lat2.len() != length {
        return Err(Error::LengthMismatch {
            lon1: length,
            lat1: lat1.len(),
            lon2: lon2.len(),
            lat2: lat2.len(),
        });
    }

    if !unit.is_valid() {
        return Err(Error::InvalidUnit(unit.ratio()));
    }

    if tolerance.0.is_nan() || tolerance.0 <= 0.0 {
        return Err(Error::InvalidTolerance(tolerance.0));
    }

    Ok(())
}

/// Calculate the geodesic distances between pairs of points and whether
/// each distance converged.
///
/// The points of pair `i` are (`lon1[i]`, `lat1[i]`) and (`lon2[i]`, `lat2[i]`),
/// in degrees. Coordinates are not range checked.
/// * `lon1`, `lat1`, `lon2`, `lat2` - the coordinates, all the same length.
/// * `unit` - the `Unit` of the distances.
/// * `tolerance` - the convergence tolerance of `lambda`.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `Distances` or an `Error` if the coordinate lengths differ, the
/// `unit` is invalid or the `tolerance` is not positive.
///
/// # Errors
///
/// `Error::LengthMismatch`, `Error::InvalidUnit` or `Error::InvalidTolerance`.
///
/// # Examples
/// ```
/// use vincenty_wgs84::vincenty::{calculate_distances_with_status, DEFAULT_TOLERANCE};
/// use vincenty_wgs84::{Unit, WGS84_ELLIPSOID};
///
/// // Istanbul to Washington and Washington to itself
/// let result = calculate_distances_with_status(
///     &[29.0, -77.0],
///     &[42.0, 39.0],
///     &[-77.0, -77.0],
///     &[39.0, 39.0],
///     Unit::Kilometres,
///     DEFAULT_TOLERANCE,
///     &WGS84_ELLIPSOID,
/// )
/// .unwrap();
///
/// assert!(result.all_converged());
/// assert!((result.values()[0] - 8_339.863).abs() < 1e-3);
/// assert_eq!(0.0, result.values()[1]);
/// ```
pub fn calculate_distances_with_status(
    lon1: &[f64],
    lat1: &[f64],
    lon2: &[f64],
    lat2: &[f64],
    unit: Unit,
    tolerance: Radians,
    ellipsoid: &Ellipsoid,
) -> Result<Distances, Error> {
    validate_arguments(lon1, lat1, lon2, lat2, unit, tolerance)?;

    let one_minus_f = ellipsoid.one_minus_f();
    let (indices, mut pairs): (Vec<usize>, Vec<AuxiliaryPair>) = (0..lon1.len())
        .filter(|&i| !(lon1[i] == lon2[i] && lat1[i] == lat2[i]))
        .map(|i| {
            (
                i,
                AuxiliaryPair::new(lon1[i], lat1[i], lon2[i], lat2[i], one_minus_f),
            )
        })
        .unzip();

    let iterations = solve(&mut pairs, tolerance, ellipsoid);

    let mut values = vec![0.0; lon1.len()];
    let mut converged = vec![true; lon1.len()];
    for (&i, pair) in indices.iter().zip(&pairs) {
        values[i] = unit.convert(pair.length(ellipsoid));
        converged[i] = pair.is_converged(tolerance);
    }

    Ok(Distances {
        values,
        converged,
        iterations,
    })
}

/// Calculate the geodesic distances between pairs of points.
///
/// See `calculate_distances_with_status`. A distance that did not converge
/// is the last estimate.
///
/// # Errors
///
/// `Error::LengthMismatch`, `Error::InvalidUnit` or `Error::InvalidTolerance`.
pub fn calculate_distances(
    lon1: &[f64],
    lat1: &[f64],
    lon2: &[f64],
    lat2: &[f64],
    unit: Unit,
    tolerance: Radians,
    ellipsoid: &Ellipsoid,
) -> Result<Vec<f64>, Error> {
    calculate_distances_with_status(lon1, lat1, lon2, lat2, unit, tolerance, ellipsoid)
        .map(Distances::into_values)
}

/// Calculate the geodesic distance between a pair of points.
/// * `lon1`, `lat1` - the start point.
/// * `lon2`, `lat2` - the finish point.
/// * `tolerance` - the convergence tolerance of `lambda`.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `Solution`: the distance in metres.
#[must_use]
pub fn calculate_pair_distance(
    lon1: Degrees,
    lat1: Degrees,
    lon2: Degrees,
    lat2: Degrees,
    tolerance: Radians,
    ellipsoid: &Ellipsoid,
) -> Solution {
    if lon1.0 == lon2.0 && lat1.0 == lat2.0 {
        return Solution {
            distance: Metres(0.0),
            iterations: 0,
            converged: true,
        };
    }

    let mut pair = [AuxiliaryPair::new(
        lon1.0,
        lat1.0,
        lon2.0,
        lat2.0,
        ellipsoid.one_minus_f(),
    )];
    let iterations = solve(&mut pair, tolerance, ellipsoid);
    Solution {
        distance: pair[0].length(ellipsoid),
        iterations,
        converged: pair[0].is_converged(tolerance),
    }
}

/// Calculate the geodesic distance between a pair of positions.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `tolerance` - the convergence tolerance of `lambda`.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `Solution`: the distance in metres.
#[must_use]
pub fn calculate_distance(
    a: &LatLong,
    b: &LatLong,
    tolerance: Radians,
    ellipsoid: &Ellipsoid,
) -> Solution {
    calculate_pair_distance(a.lon(), a.lat(), b.lon(), b.lat(), tolerance, ellipsoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    const UNITS: [Unit; 5] = [
        Unit::Metres,
        Unit::Kilometres,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Custom(3.280_84),
    ];

    fn pair_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Solution {
        calculate_pair_distance(
            Degrees(lon1),
            Degrees(lat1),
            Degrees(lon2),
            Degrees(lat2),
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        )
    }

    #[test]
    fn test_calculate_distance_karney() {
        let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
        let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));

        let result =
            calculate_distance(&istanbul, &washington, DEFAULT_TOLERANCE, &WGS84_ELLIPSOID);
        assert!(result.converged());
        assert!(result.iterations() < MAX_ITERATIONS);
        assert!(is_within_tolerance(
            8_339_863.136_005_359,
            result.distance().0,
            1e-4
        ));
    }

    #[test]
    fn test_calculate_distance_normal_05() {
        // GeodTest.dat line 2874
        // 5.421025561218 0 84.846843174846
        // 3.027329237478900117 109.666857465735641205 96.826992198613537236
        // 12161089.9991805 109.607910081857488806 5988906.6319258056178 8449589948776.249238
        let result = pair_distance(
            0.0,
            5.421025561218,
            109.666857465735641205,
            3.027329237478900117,
        );
        assert!(result.converged());
        assert!(is_within_tolerance(12161089.9991805, result.distance().0, 1e-4));
    }

    #[test]
    fn test_calculate_distance_nearly_antipodal() {
        // GeodTest.dat line 100001
        // 8.226828747671 0 111.1269645725
        // -8.516119211674268968 178.688979582629224039 68.982798544955243193
        // 19886305.6710041 179.197987814300505446 97496.4436255989712 -29736790544759.340534
        let result = pair_distance(
            0.0,
            8.226828747671,
            178.688979582629224039,
            -8.516119211674268968,
        );
        assert_eq!(MAX_ITERATIONS, result.iterations());
        assert!(is_within_tolerance(19886305.6710041, result.distance().0, 1e-3));
    }

    #[test]
    fn test_calculate_distance_antipodal_equator() {
        // lambda oscillates about pi and never converges
        let result = pair_distance(0.0, 0.0, 180.0, 0.0);
        assert!(!result.converged());
        assert_eq!(MAX_ITERATIONS, result.iterations());
        assert!(result.distance().0.is_finite());
        assert!(0.0 < result.distance().0);
    }

    #[test]
    fn test_calculate_distance_equator() {
        // An equatorial line: cos²α is zero
        let result = pair_distance(0.0, 0.0, 90.0, 0.0);
        assert!(result.converged());
        assert!(is_within_tolerance(
            wgs84_quarter_equator(),
            result.distance().0,
            1e-4
        ));

        // Westbound
        let result = pair_distance(45.0, 0.0, -45.0, 0.0);
        assert!(is_within_tolerance(
            wgs84_quarter_equator(),
            result.distance().0,
            1e-4
        ));

        // One degree of longitude
        let result = pair_distance(-0.5, 0.0, 0.5, 0.0);
        assert!(is_within_tolerance(111_319.5, result.distance().0, 50.0));
    }

    fn wgs84_quarter_equator() -> f64 {
        crate::ellipsoid::wgs84::A.0 * core::f64::consts::FRAC_PI_2
    }

    #[test]
    fn test_calculate_distance_meridian() {
        // The WGS 84 meridian quadrant
        let result = pair_distance(0.0, 0.0, 0.0, 90.0);
        assert!(result.converged());
        assert!(is_within_tolerance(10_001_965.729, result.distance().0, 1e-3));

        let result = pair_distance(10.0, 0.0, 10.0, -90.0);
        assert!(is_within_tolerance(10_001_965.729, result.distance().0, 1e-3));
    }

    #[test]
    fn test_calculate_distance_same_point() {
        for &(lon, lat) in &[(0.0, 0.0), (-120.0, 45.0), (180.0, -90.0), (29.0, 42.0)] {
            let result = pair_distance(lon, lat, lon, lat);
            assert_eq!(0.0, result.distance().0);
            assert_eq!(0, result.iterations());
            assert!(result.converged());

            for unit in UNITS {
                let values = calculate_distances(
                    &[lon],
                    &[lat],
                    &[lon],
                    &[lat],
                    unit,
                    DEFAULT_TOLERANCE,
                    &WGS84_ELLIPSOID,
                )
                .unwrap();
                assert_eq!(vec![0.0], values);
            }
        }
    }

    #[test]
    fn test_calculate_distance_symmetry() {
        let points = [
            (29.0, 42.0, -77.0, 39.0),
            (-120.0, 45.0, 151.2, -33.9),
            (0.0, 5.421025561218, 109.666857465735641205, 3.027329237478900117),
            (-0.5, 60.0, 0.5, 60.0),
            (3.0, -10.0, 3.0, 80.0),
        ];
        for (lon1, lat1, lon2, lat2) in points {
            let forward = pair_distance(lon1, lat1, lon2, lat2).distance().0;
            let reverse = pair_distance(lon2, lat2, lon1, lat1).distance().0;
            assert!(libm::fabs(forward - reverse) / forward < 1e-6);
        }
    }

    #[test]
    fn test_calculate_distances_units() {
        let lon1 = [29.0, -120.0];
        let lat1 = [42.0, 45.0];
        let lon2 = [-77.0, -119.0];
        let lat2 = [39.0, 45.5];

        let metres = calculate_distances(
            &lon1,
            &lat1,
            &lon2,
            &lat2,
            Unit::Metres,
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        )
        .unwrap();

        for unit in UNITS {
            let values = calculate_distances(
                &lon1,
                &lat1,
                &lon2,
                &lat2,
                unit,
                DEFAULT_TOLERANCE,
                &WGS84_ELLIPSOID,
            )
            .unwrap();
            for (value, metres) in values.iter().zip(&metres) {
                assert!(is_within_tolerance(metres * unit.ratio(), *value, 1e-9));
            }
        }
    }

    #[test]
    fn test_calculate_distances_degenerate_mask() {
        let lon1 = [29.0, 10.0, -120.0, -45.5, 0.0];
        let lat1 = [42.0, 20.0, 45.0, -60.25, 0.0];
        let lon2 = [-77.0, 10.0, -119.0, -45.5, 90.0];
        let lat2 = [39.0, 20.0, 45.5, -60.25, 0.0];

        let result = calculate_distances_with_status(
            &lon1,
            &lat1,
            &lon2,
            &lat2,
            Unit::Metres,
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        )
        .unwrap();
        assert!(result.all_converged());
        assert!(result.iterations() < MAX_ITERATIONS);

        let values = result.values();
        assert_eq!(5, values.len());
        for i in 0..5 {
            if i == 1 || i == 3 {
                assert_eq!(0.0, values[i]);
            } else {
                assert!(0.0 < values[i]);
                let expected = pair_distance(lon1[i], lat1[i], lon2[i], lat2[i]);
                assert!(is_within_tolerance(expected.distance().0, values[i], 1e-4));
            }
        }
    }

    #[test]
    fn test_calculate_distances_non_convergence() {
        let result = calculate_distances_with_status(
            &[29.0, 0.0],
            &[42.0, 0.0],
            &[-77.0, 180.0],
            &[39.0, 0.0],
            Unit::Metres,
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        )
        .unwrap();
        assert_eq!(MAX_ITERATIONS, result.iterations());
        assert_eq!(&[true, false], result.converged());
        assert!(!result.all_converged());

        // The converged distance is unaffected by the extra iterations
        assert!(is_within_tolerance(
            8_339_863.136_005_359,
            result.values()[0],
            1e-4
        ));
    }

    #[test]
    fn test_calculate_distances_empty() {
        let result = calculate_distances_with_status(
            &[],
            &[],
            &[],
            &[],
            Unit::Metres,
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        )
        .unwrap();
        assert!(result.values().is_empty());
        assert_eq!(0, result.iterations());
    }

    #[test]
    fn test_calculate_distances_errors() {
        let result = calculate_distances(
            &[0.0, 1.0],
            &[0.0, 1.0],
            &[0.0],
            &[0.0, 1.0],
            Unit::Metres,
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        );
        assert_eq!(
            Err(Error::LengthMismatch {
                lon1: 2,
                lat1: 2,
                lon2: 1,
                lat2: 2
            }),
            result
        );

        let result = calculate_distances(
            &[0.0],
            &[0.0],
            &[1.0],
            &[1.0],
            Unit::Custom(-2.0),
            DEFAULT_TOLERANCE,
            &WGS84_ELLIPSOID,
        );
        assert_eq!(Err(Error::InvalidUnit(-2.0)), result);

        let result = calculate_distances(
            &[0.0],
            &[0.0],
            &[1.0],
            &[1.0],
            Unit::Metres,
            Radians(0.0),
            &WGS84_ELLIPSOID,
        );
        assert_eq!(Err(Error::InvalidTolerance(0.0)), result);

        let result = calculate_distances(
            &[0.0],
            &[0.0],
            &[1.0],
            &[1.0],
            Unit::Metres,
            Radians(f64::NAN),
            &WGS84_ELLIPSOID,
        );
        assert!(matches!(result, Err(Error::InvalidTolerance(_))));
    }
}
