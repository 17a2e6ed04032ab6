//! Brazilian individual taxpayer number (CPF) validation.
//!
//! A CPF carries nine body digits followed by two modulo-11 check digits. The
//! validator ignores punctuation, so `529.982.247-25` and `52998224725` are
//! equivalent inputs.

/// Number of digits in a CPF once punctuation is stripped.
pub const CPF_LENGTH: usize = 11;

const MODULUS: u32 = 11;

/// Returns `true` when `candidate` is a structurally and arithmetically valid
/// CPF.
///
/// Every non-digit character is discarded first. The remaining digits must
/// number exactly eleven, must not all be the same digit, and must end in the
/// two check digits derived from the digits preceding each of them.
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }

    let Some((&second_check, first_ten)) = digits.split_last() else {
        return false;
    };
    let Some((&first_check, first_nine)) = first_ten.split_last() else {
        return false;
    };

    if first_ten.iter().all(|&digit| digit == second_check) {
        return false;
    }

    check_digit(first_nine) == first_check && check_digit(first_ten) == second_check
}

/// Computes the check digit that follows `digits`.
///
/// The last digit carries weight 2, the one before it weight 3, and so on.
/// The weighted sum is multiplied by ten and reduced modulo 11, with a
/// remainder of ten collapsing to zero.
fn check_digit(digits: &[u32]) -> u32 {
    let weighted_sum: u32 = digits
        .iter()
        .rev()
        .zip(2_u32..)
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = (weighted_sum * 10).rem_euclid(MODULUS);
    if remainder >= 10 { 0 } else { remainder }
}
