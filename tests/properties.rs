use proptest::prelude::*;

use polysecret::encoding::radix::{decode, encode};
use polysecret::primitives::BigInt;
use polysecret::recovery::lagrange::{Point, interpolate_at_zero};

/// Decimal strings of up to 60 digits with an optional sign.
fn decimal() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{1,60}").prop_map(|(neg, digits)| {
        if neg {
            format!("-{digits}")
        } else {
            digits
        }
    })
}

fn bigint() -> impl Strategy<Value = BigInt> {
    decimal().prop_map(|s| s.parse().unwrap())
}

/// Strips leading zeros and turns `-0` into `0`.
fn canonical(s: &str) -> String {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_owned()
    } else if neg {
        format!("-{trimmed}")
    } else {
        trimmed.to_owned()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn string_roundtrip(s in decimal()) {
        let value: BigInt = s.parse().unwrap();
        prop_assert_eq!(value.to_string(), canonical(&s));
    }

    #[test]
    fn additive_identity_and_inverse(a in bigint()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert!(!(&a - &a).is_negative());
    }

    #[test]
    fn addition_commutes_and_associates(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn multiplication_commutes_and_associates(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn multiplication_distributes(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn matches_machine_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let (a, b) = (a as i64, b as i64);

        prop_assert_eq!((BigInt::from(a) * BigInt::from(b)).to_i64_saturating(), a * b);
        prop_assert_eq!((BigInt::from(a) + BigInt::from(b)).to_i64_saturating(), a + b);
        prop_assert_eq!((BigInt::from(a) - BigInt::from(b)).to_i64_saturating(), a - b);
        prop_assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), a.cmp(&b));
    }

    #[test]
    fn division_identity(a in bigint(), b in bigint()) {
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(&b).unwrap();

        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.cmp_magnitude(&b), std::cmp::Ordering::Less);
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn radix_roundtrip(a in bigint(), base in 2u32..=36) {
        let text = encode(&a, base).unwrap();
        prop_assert_eq!(decode(text.trim_start_matches('-'), base).unwrap(), a.abs());
    }

    #[test]
    fn interpolation_recovers_constant_term(
        coeffs in prop::collection::vec(bigint(), 1..8),
        offset in -20i64..20,
    ) {
        let xs: Vec<i64> = (0..coeffs.len() as i64).map(|i| offset + 2 * i + 1).collect();

        let points: Vec<Point> = xs
            .iter()
            .map(|&x| {
                let bx = BigInt::from(x);
                let y = coeffs.iter().rev().fold(BigInt::zero(), |acc, c| &(&acc * &bx) + c);
                Point::new(x, y)
            })
            .collect();

        prop_assert_eq!(interpolate_at_zero(&points).unwrap(), coeffs[0].clone());

        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(interpolate_at_zero(&reversed).unwrap(), coeffs[0].clone());
    }
}
