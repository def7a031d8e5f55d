//! Check-digit validators for numeric identifiers.
//!
//! Pure functions over digit strings: input is stripped of separators, the
//! length domain is checked, and the check-digit fold runs over what is left.
//! A malformed candidate (wrong length, no digits) is a normal negative
//! result, never an error.

use serde::{Deserialize, Serialize};

/// Which check-digit algorithm a validated rule applies to its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Checksum {
    /// Luhn mod-10, payment-card length domain (13–19 digits).
    Luhn,
    /// Verhoeff, fixed 12-digit national-ID domain.
    Verhoeff,
}

impl Checksum {
    /// Validate a candidate against this algorithm.
    pub fn validate(&self, candidate: &str) -> bool {
        match self {
            Self::Luhn => luhn_valid(candidate),
            Self::Verhoeff => verhoeff_valid(candidate),
        }
    }
}

/// Luhn mod-10 check for payment-card numbers.
///
/// Non-digit characters are stripped first, so formatted candidates like
/// `4111 1111 1111 1111` validate the same as the bare digit run. Digit
/// counts outside the 13–19 payment-card range fail outright.
pub fn luhn_valid(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for &digit in digits.iter().rev() {
        let mut d = digit;
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    sum % 10 == 0
}

/// Dihedral multiplication table.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation table, cycle length 8.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Verhoeff check for 12-digit national-ID numbers.
///
/// Digits are folded right-to-left through the dihedral multiplication and
/// position permutation tables; the number is valid iff the accumulator ends
/// at zero. Candidates that do not strip to exactly 12 digits fail.
pub fn verhoeff_valid(candidate: &str) -> bool {
    let digits: Vec<u8> = candidate
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    if digits.len() != 12 {
        return false;
    }

    let mut c = 0u8;
    for (i, &digit) in digits.iter().rev().enumerate() {
        c = D[c as usize][P[i % 8][digit as usize] as usize];
    }
    c == 0
}
