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

//! The error module contains the `Error` type returned by the distance
//! calculations and the `DegreeDistance` constructors.

/// The reasons that a calculation cannot be performed.
///
/// Note: failing to converge is not an error, see
/// `vincenty::calculate_distances_with_status`.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The coordinate slices of a batch have different lengths.
    #[error("coordinate lengths differ: lon1 {lon1}, lat1 {lat1}, lon2 {lon2}, lat2 {lat2}")]
    LengthMismatch {
        lon1: usize,
        lat1: usize,
        lon2: usize,
        lat2: usize,
    },

    /// A unit ratio that is not finite and positive.
    #[error("invalid unit ratio: {0}")]
    InvalidUnit(f64),

    /// A convergence tolerance that is not positive.
    #[error("invalid tolerance: {0} radians")]
    InvalidTolerance(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::LengthMismatch {
            lon1: 3,
            lat1: 3,
            lon2: 2,
            lat2: 3,
        };
        assert_eq!(
            "coordinate lengths differ: lon1 3, lat1 3, lon2 2, lat2 3",
            error.to_string()
        );
        assert_eq!("invalid unit ratio: -1", Error::InvalidUnit(-1.0).to_string());
        assert_eq!(
            "invalid tolerance: 0 radians",
            Error::InvalidTolerance(0.0).to_string()
        );
    }
}
