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

//! The unit module contains the `Unit` of length that distances are
//! returned in.
//!
//! A `Unit` is a named length with a fixed ratio to metres or a `Custom`
//! ratio. Distances are calculated in metres and multiplied by the ratio.

use crate::{Metres, Validate};
use core::fmt;

/// A unit of length, represented by its ratio to a metre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Unit {
    /// The metre, the SI unit of length.
    #[default]
    Metres,
    /// 1000 metres.
    Kilometres,
    /// The statute mile, 1609.34 metres.
    Miles,
    /// The international nautical mile, 1852 metres.
    NauticalMiles,
    /// Any other unit: the number of units per metre.
    Custom(f64),
}

impl Unit {
    /// The number of units in a metre.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::Unit;
    ///
    /// assert_eq!(1.0, Unit::Metres.ratio());
    /// assert_eq!(0.001, Unit::Kilometres.ratio());
    /// assert_eq!(3.28084, Unit::Custom(3.28084).ratio());
    /// ```
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Metres => 1.0,
            Self::Kilometres => 1.0 / 1000.0,
            Self::Miles => 1.0 / 1609.34,
            Self::NauticalMiles => 1.0 / 1852.0,
            Self::Custom(ratio) => ratio,
        }
    }

    /// The abbreviation of the unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Kilometres => "km",
            Self::Miles => "mi",
            Self::NauticalMiles => "NM",
            Self::Custom(_) => "units",
        }
    }

    /// Convert a length in metres into this unit.
    /// * `length` - the length in metres.
    #[must_use]
    pub fn convert(self, length: Metres) -> f64 {
        length.0 * self.ratio()
    }
}

impl Validate for Unit {
    /// Test whether a `Unit` is valid.
    /// Whether its ratio is finite and greater than zero.
    fn is_valid(&self) -> bool {
        let ratio = self.ratio();
        ratio.is_finite() && 0.0 < ratio
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
