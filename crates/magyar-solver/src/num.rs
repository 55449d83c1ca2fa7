// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cost Numeric Trait
//!
//! Unified numeric bounds for the assignment solver. `CostNumeric` collects
//! the integer capabilities the Hungarian iteration needs into a single
//! alias: intrinsic integer behavior (`PrimInt`), by-value saturating
//! addition for the forbidden-pair penalty, hashing so assignments can be
//! deduplicated in sets, and formatting for monitors.
//!
//! Both unsigned and signed integer types qualify; signed matrices are
//! accepted and their entries checked for negativity during validation.

use magyar_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use num_traits::PrimInt;
use std::hash::Hash;

/// A trait alias for integer types usable as assignment costs.
///
/// Implemented for all primitive integer types via the blanket impl.
pub trait CostNumeric:
    PrimInt + SaturatingAddVal + Hash + std::fmt::Debug + std::fmt::Display
{
}

impl<T> CostNumeric for T where
    T: PrimInt + SaturatingAddVal + Hash + std::fmt::Debug + std::fmt::Display
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cost_numeric<T: CostNumeric>() {}

    #[test]
    fn test_primitive_integers_qualify() {
        assert_cost_numeric::<u32>();
        assert_cost_numeric::<u64>();
        assert_cost_numeric::<usize>();
        assert_cost_numeric::<i32>();
        assert_cost_numeric::<i64>();
    }
}
