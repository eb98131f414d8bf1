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

//! This module contains the series used by Vincenty's inverse method to
//! convert a great circle arc on the auxiliary sphere into a geodesic length
//! on the ellipsoid.
//!
//! The equations are given by T Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, 1975.

#![allow(clippy::suboptimal_flops)]

/// The scale factor `A`, Vincenty Eq. 3.
/// * `u_2` - `u²`, the square of the cosine of the azimuth at the Equator
///   multiplied by the square of the second eccentricity.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use vincenty_wgs84::ellipsoid::coefficients::evaluate_a;
///
/// // evaluate_a for a meridional geodesic on WGS 84
/// let u_2 = calculate_sq_2nd_eccentricity(wgs84::F);
/// assert_eq!(1.0016827510415456, evaluate_a(u_2));
/// ```
#[must_use]
pub fn evaluate_a(u_2: f64) -> f64 {
    1.0 + u_2 / 16384.0 * (4096.0 + u_2 * (-768.0 + u_2 * (320.0 - 175.0 * u_2)))
}

/// The scale factor `B`, Vincenty Eq. 4.
/// * `u_2` - `u²`, see `evaluate_a`.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use vincenty_wgs84::ellipsoid::coefficients::evaluate_b;
///
/// let u_2 = calculate_sq_2nd_eccentricity(wgs84::F);
/// assert_eq!(0.0016792186103152505, evaluate_b(u_2));
/// ```
#[must_use]
pub fn evaluate_b(u_2: f64) -> f64 {
    u_2 / 1024.0 * (256.0 + u_2 * (-128.0 + u_2 * (74.0 - 47.0 * u_2)))
}

/// The longitude correction factor `C`, Vincenty Eq. 10.
/// * `f` - the flattening ratio.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::wgs84;
/// use vincenty_wgs84::ellipsoid::coefficients::evaluate_c;
///
/// assert_eq!(0.0, evaluate_c(wgs84::F, 0.0));
/// assert_eq!(0.0008389052498964729, evaluate_c(wgs84::F, 1.0));
/// ```
#[must_use]
pub fn evaluate_c(f: f64, sq_cos_alpha: f64) -> f64 {
    f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha))
}

/// Calculate `cos(2σm)`, the cosine of twice the arc length from the
/// Equator to the mid point of the line, Vincenty Eq. 13 rearranged.
///
/// An equatorial line has no Equator crossing, `cos²α` is zero and so
/// `cos(2σm)` is taken as zero.
/// * `cos_sigma` - the cosine of the arc length on the auxiliary sphere.
/// * `sin_u1`, `sin_u2` - the sines of the reduced latitudes.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn calculate_cos_2sigma_m(
    cos_sigma: f64,
    sin_u1: f64,
    sin_u2: f64,
    sq_cos_alpha: f64,
) -> f64 {
    if sq_cos_alpha == 0.0 {
        0.0
    } else {
        cos_sigma - 2.0 * sin_u1 * sin_u2 / sq_cos_alpha
    }
}

/// The longitude difference on the auxiliary sphere, Vincenty Eq. 11.
/// * `l` - the longitude difference on the ellipsoid.
/// * `f` - the flattening ratio.
/// * `c` - the factor `C`, see `evaluate_c`.
/// * `sin_alpha` - the sine of the azimuth at the Equator.
/// * `sigma`, `sin_sigma`, `cos_sigma` - the arc length on the auxiliary sphere.
/// * `cos_2sigma_m` - see `calculate_cos_2sigma_m`.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn calculate_lambda(
    l: f64,
    f: f64,
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    l + (1.0 - c)
        * f
        * sin_alpha
        * (sigma
            + c * sin_sigma
                * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}

/// The arc length correction `Δσ`, Vincenty Eq. 6.
/// * `b` - the factor `B`, see `evaluate_b`.
/// * `sin_sigma`, `cos_sigma` - the arc length on the auxiliary sphere.
/// * `cos_2sigma_m` - see `calculate_cos_2sigma_m`.
#[must_use]
pub fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * sq_cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * sq_cos_2sigma_m)))
}
