// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt::Debug;

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Floating-point coordinate type shared by every primitive and builder.
///
/// The engine is written against `f64`; `f32` is accepted for hosts that keep
/// their point buffers in single precision.
pub trait Scalar:
    Float + FromPrimitive + ToPrimitive + Debug + Default + Send + Sync + 'static
{
    /// `num / den` in this scalar type.
    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from_i32(num).unwrap_or_else(Self::zero) / Self::from_i32(den).unwrap_or_else(Self::one)
    }

    /// Lossy conversion from `f64`, used for configuration constants.
    fn from_f64_lossy(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).unwrap_or_else(Self::zero)
    }

    /// Lossy conversion to `f64`, used for logging and rendering.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    fn is_positive_or_zero(&self) -> bool {
        *self >= Self::zero()
    }

    fn is_negative_or_zero(&self) -> bool {
        *self <= Self::zero()
    }
}

impl Scalar for f64 {}
impl Scalar for f32 {}
