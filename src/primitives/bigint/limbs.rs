//! Magnitude arithmetic on decimal-radix limb slices.
//!
//! Every function here works on unsigned magnitudes stored as `u64` limbs in
//! radix `10^18`, least significant limb first. Inputs are expected to be
//! canonical (no most-significant zero limbs except for zero itself, which
//! is `[0]`) and every returned vector is canonical as well.
//!
//! Sign handling lives one level up in `ops`; this module only knows about
//! magnitudes and carries.

use std::cmp::Ordering;

/// Radix of a single limb.
pub(crate) const RADIX: u64 = 1_000_000_000_000_000_000;

/// Number of decimal digits held by a full limb.
pub(crate) const DIGITS: usize = 18;

const WIDE_RADIX: u128 = RADIX as u128;

/// Drops most-significant zero limbs, keeping a single zero limb for zero.
pub(crate) fn trim(limbs: &mut Vec<u64>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }

    if limbs.is_empty() {
        limbs.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(limbs: &[u64]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

/// Compares two canonical magnitudes.
///
/// The longer magnitude is larger; equal lengths are compared from the most
/// significant limb down.
pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b`.
pub(crate) fn add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u64;

    for i in 0..len {
        // Two limbs plus a carry stay below 2·10^18 + 1, well inside u64.
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;

        out.push(sum % RADIX);
        carry = sum / RADIX;
    }

    if carry != 0 {
        out.push(carry);
    }

    trim(&mut out);
    out
}

/// `a - b`, requires `a >= b`.
pub(crate) fn sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude underflow");

    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u64;

    for (i, &limb) in a.iter().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(0) + borrow;

        if limb >= rhs {
            out.push(limb - rhs);
            borrow = 0;
        } else {
            out.push(limb + RADIX - rhs);
            borrow = 1;
        }
    }

    trim(&mut out);
    out
}

/// Schoolbook `a * b`.
///
/// The product of two limbs is below `10^36`, so every partial sum fits in a
/// `u128` accumulator together with the running carry.
pub(crate) fn mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut acc = vec![0u64; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry = 0u128;

        for (j, &y) in b.iter().enumerate() {
            let cur = acc[i + j] as u128 + x as u128 * y as u128 + carry;

            acc[i + j] = (cur % WIDE_RADIX) as u64;
            carry = cur / WIDE_RADIX;
        }

        let mut k = i + b.len();
        while carry != 0 {
            let cur = acc[k] as u128 + carry;

            acc[k] = (cur % WIDE_RADIX) as u64;
            carry = cur / WIDE_RADIX;
            k += 1;
        }
    }

    trim(&mut acc);
    acc
}

/// `a * m` for a single-limb multiplier `m < RADIX`.
pub(crate) fn mul_small(a: &[u64], m: u64) -> Vec<u64> {
    debug_assert!(m < RADIX);

    if m == 0 {
        return vec![0];
    }

    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u128;

    for &limb in a {
        let cur = limb as u128 * m as u128 + carry;

        out.push((cur % WIDE_RADIX) as u64);
        carry = cur / WIDE_RADIX;
    }

    if carry != 0 {
        out.push(carry as u64);
    }

    trim(&mut out);
    out
}

/// `a + m` for a single-limb addend `m < RADIX`.
pub(crate) fn add_small(a: &[u64], m: u64) -> Vec<u64> {
    add(a, &[m])
}

/// Long division `a / b`, returning `(quotient, remainder)`.
///
/// The dividend is consumed one limb at a time from the most significant
/// end. After each limb is brought down the running remainder is below
/// `b · RADIX`, so the next quotient limb fits in a single limb and is found
/// by a bounded search seeded from the leading limbs.
///
/// # Panics
///
/// Panics if `b` is zero; callers check this first.
pub(crate) fn div_rem(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    assert!(!is_zero(b), "division by zero");

    if cmp(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }

    let mut quotient = vec![0u64; a.len()];
    let mut rem: Vec<u64> = vec![0];

    for i in (0..a.len()).rev() {
        rem.insert(0, a[i]);
        trim(&mut rem);

        let digit = quotient_limb(&rem, b);
        if digit != 0 {
            rem = sub(&rem, &mul_small(b, digit));
        }

        quotient[i] = digit;
    }

    trim(&mut quotient);
    (quotient, rem)
}

/// Largest `q < RADIX` with `b * q <= rem`, given `rem < b * RADIX`.
fn quotient_limb(rem: &[u64], b: &[u64]) -> u64 {
    if cmp(rem, b) == Ordering::Less {
        return 0;
    }

    // Bound q from the leading limbs of `rem` aligned with the top limb of `b`:
    // top / (b_top + 1) <= q <= top / b_top.
    let b_top = b[b.len() - 1] as u128;
    let top = if rem.len() > b.len() {
        rem[rem.len() - 1] as u128 * WIDE_RADIX + rem[rem.len() - 2] as u128
    } else {
        rem[rem.len() - 1] as u128
    };

    let mut lo = (top / (b_top + 1)).max(1) as u64;
    let mut hi = (top / b_top).min(WIDE_RADIX - 1) as u64;

    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);

        if cmp(&mul_small(b, mid), rem) == Ordering::Greater {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }

    lo
}
