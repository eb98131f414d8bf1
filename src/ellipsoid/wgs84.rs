// Copyright (c) 2024 Ken Barker

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

//! The wgs84 module contains the WGS 84 primary parameters, see Tab. 3-1 of the
//! [ICAO WGS-84 Implementation Manual](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf),
//! and the Semiminor axis derived from them.

use crate::ellipsoid::{calculate_minor_axis, Metres};

/// The WGS 84 Semimajor axis: the equatorial radius in metres.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening ratio.
pub const F: f64 = 1.0 / 298.257_223_563;

/// The WGS 84 Semiminor axis: the polar radius in metres.
pub const B: Metres = calculate_minor_axis(A, F);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_minor_axis() {
        assert_eq!(6_356_752.314_245_179, B.0);
        assert!(B.0 < A.0);
    }
}
