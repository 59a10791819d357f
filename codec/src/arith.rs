//! Carry-propagating arithmetic built from bitwise operators.
//!
//! Addition is computed by iterating `sum = a ^ b`, `carry = (a & b) << 1`
//! until the carry is exhausted; subtraction negates the subtrahend via
//! two's complement and delegates to [`add`]. Both operate on a fixed
//! 64-bit width and wrap on overflow, matching native two's-complement
//! arithmetic.

/// Adds two integers using only AND, XOR, and shift.
///
/// Wraps on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    let mut sum = a;
    let mut carry = b;
    while carry != 0 {
        let shifted = (sum & carry) << 1;
        sum ^= carry;
        carry = shifted;
    }
    sum
}

/// Subtracts `b` from `a` using only AND, XOR, NOT, and shift.
///
/// Wraps on overflow.
pub fn subtract(a: i64, b: i64) -> i64 {
    // two's complement of the subtrahend
    add(a, add(!b, 1))
}
