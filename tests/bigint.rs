use polysecret::Error;
use polysecret::primitives::BigInt;

use std::cmp::Ordering;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn bigint_parse_and_display_canonical() {
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(big("-00").to_string(), "0");
    assert_eq!(big("").to_string(), "0");

    let long = "123456789012345678901234567890123456789";
    assert_eq!(big(long).to_string(), long);

    // Exactly one limb radix: the lower limb must be zero-padded.
    assert_eq!(big("-1000000000000000000").to_string(), "-1000000000000000000");
    assert_eq!(
        big("1000000000000000000000000000000000001").to_string(),
        "1000000000000000000000000000000000001"
    );
}

#[test]
fn bigint_parse_rejects_malformed_input() {
    for bad in ["-", "12a", "+5", " 1", "1 ", "--1", "1-2", "0x10"] {
        let result = bad.parse::<BigInt>();
        assert!(matches!(result, Err(Error::InvalidFormat(_))), "{bad:?} should fail");
    }
}

#[test]
fn bigint_zero_is_never_negative() {
    let zero = -BigInt::zero();
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInt::zero());

    let five = BigInt::from(5);
    let diff = &five - &five;
    assert!(!diff.is_negative());
    assert!(diff.is_zero());
}

#[test]
fn bigint_add_sub_all_sign_combinations() {
    let five = BigInt::from(5);
    let eight = BigInt::from(8);

    assert_eq!(&five + &(-&eight), BigInt::from(-3));
    assert_eq!(-&five + &eight, BigInt::from(3));
    assert_eq!(-&five - &eight, BigInt::from(-13));
    assert_eq!(&five - &eight, BigInt::from(-3));
    assert_eq!(-&five - -&eight, BigInt::from(3));
    assert_eq!(&five + &eight, BigInt::from(13));
}

#[test]
fn bigint_carry_and_borrow_across_limbs() {
    let max_limb = BigInt::from(999_999_999_999_999_999u64);
    let radix = big("1000000000000000000");

    assert_eq!(&max_limb + &BigInt::one(), radix);
    assert_eq!(&radix - &BigInt::one(), max_limb);
    assert_eq!(radix.limb_len(), 2);
}

#[test]
fn bigint_large_arithmetic() {
    let a = big("123456789012345678901234567890");
    let b = big("987654321098765432109876543210");

    assert_eq!(
        (&a * &b).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );
    assert_eq!((&a + &b).to_string(), "1111111110111111111011111111100");
    assert_eq!((&a - &b).to_string(), "-864197532086419753208641975320");
    assert_eq!(
        (-&a * &b).to_string(),
        "-121932631137021795226185032733622923332237463801111263526900"
    );
    assert_eq!(&a * &BigInt::zero(), BigInt::zero());
}

#[test]
fn bigint_power_of_two() {
    let mut acc = BigInt::one();
    for _ in 0..256 {
        acc = &acc * &BigInt::from(2);
    }

    assert_eq!(
        acc.to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
    );
}

#[test]
fn bigint_ordering() {
    let mut values = vec![
        big("100000000000000000000"),
        BigInt::from(-2),
        BigInt::zero(),
        big("-100000000000000000000"),
        BigInt::from(2),
        BigInt::from(-10),
    ];
    values.sort();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["-100000000000000000000", "-10", "-2", "0", "2", "100000000000000000000"]
    );

    assert_eq!(BigInt::from(-3).cmp_magnitude(&BigInt::from(2)), Ordering::Greater);
}

#[test]
fn bigint_machine_integer_conversions() {
    assert_eq!(BigInt::from(i64::MAX).to_i64_saturating(), i64::MAX);
    assert_eq!(BigInt::from(i64::MIN).to_i64_saturating(), i64::MIN);
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");

    let huge = big("1000000000000000000000000000000");
    assert_eq!(huge.to_i64_saturating(), i64::MAX);
    assert_eq!((-&huge).to_i64_saturating(), i64::MIN);
    assert!(i64::try_from(&huge).is_err());

    let just_over = &BigInt::from(i64::MAX) + &BigInt::one();
    assert_eq!(just_over.to_i64_saturating(), i64::MAX);
    assert!(i64::try_from(&just_over).is_err());

    assert_eq!(u64::try_from(&BigInt::from(u64::MAX)), Ok(u64::MAX));
    assert!(u64::try_from(&BigInt::from(-1)).is_err());
}

#[test]
fn bigint_div_rem_truncates_toward_zero() {
    let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));

    let (q, r) = BigInt::from(7).div_rem(&BigInt::from(-2)).unwrap();
    assert_eq!((q, r), (BigInt::from(-3), BigInt::from(1)));

    let (q, r) = BigInt::from(3).div_rem(&BigInt::from(10)).unwrap();
    assert_eq!((q, r), (BigInt::zero(), BigInt::from(3)));
}

#[test]
fn bigint_div_rem_multi_limb() {
    let a = big("121932631137021795226185032733622923332237463801111263539245");
    let b = big("987654321098765432109876543210");

    let (q, r) = a.div_rem(&b).unwrap();

    assert_eq!(q.to_string(), "123456789012345678901234567890");
    assert_eq!(r.to_string(), "12345");
}

#[test]
fn bigint_division_errors() {
    assert!(matches!(
        BigInt::from(1).div_rem(&BigInt::zero()),
        Err(Error::DivisionByZero)
    ));

    assert!(matches!(
        BigInt::from(7).div_exact(&BigInt::from(2)),
        Err(Error::NonIntegerResult { .. })
    ));

    assert_eq!(BigInt::from(-12).div_exact(&BigInt::from(4)).unwrap(), BigInt::from(-3));
}

#[test]
fn bigint_gcd() {
    assert_eq!(BigInt::from(12).gcd(&BigInt::from(-18)), BigInt::from(6));
    assert_eq!(BigInt::zero().gcd(&BigInt::from(-5)), BigInt::from(5));
    assert_eq!(BigInt::zero().gcd(&BigInt::zero()), BigInt::zero());

    // 2^100 · 3^20 and 2^64 · 3^50 · 5
    let a = big("4420024338794077316988270789431736139776");
    let b = big("66214402249913471847885996069399453153361920");
    assert_eq!(a.gcd(&b).to_string(), "64319819485449658779373142016");
}

#[test]
fn bigint_limb_layout_and_sign_predicates() {
    assert_eq!(BigInt::LIMB_RADIX, 1_000_000_000_000_000_000);
    assert_eq!(BigInt::LIMB_DIGITS, 18);
    assert_eq!(BigInt::from(BigInt::LIMB_RADIX - 1).limb_len(), 1);
    assert_eq!(BigInt::from(BigInt::LIMB_RADIX).limb_len(), 2);

    assert!(BigInt::from(7).is_positive());
    assert!(!BigInt::zero().is_positive());
    assert!(!BigInt::from(-7).is_positive());
    assert!(BigInt::from(-7).is_negative());
}
