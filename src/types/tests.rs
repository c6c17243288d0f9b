use super::errors::MonetaryError;
use super::Monetary;
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1500", "1500.00"),
        ("12.5", "12.50"),
        ("0.01", "0.01"),
        ("-5.00", "-5.00"),
        ("  42.10  ", "42.10"),
        ("1.5e3", "1500.00"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(matches!(Monetary::from_str(""), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("   "), Err(MonetaryError::InvalidFormat(_))));
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("12,50").is_err());
}

#[test]
fn test_monetary_display_rounds_to_two_decimal_places() -> Result<()> {
    assert_eq!(Monetary::from_str("10.005")?.to_string(), "10.01");
    assert_eq!(Monetary::from_str("10.004")?.to_string(), "10.00");
    assert_eq!(Monetary::from_str("-2.345")?.to_string(), "-2.35");
    assert_eq!(Monetary::new().to_string(), "0.00");

    Ok(())
}

#[test]
fn test_monetary_supports_basic_addition_and_subtraction() -> Result<()> {
    let mut monetary_value_1 = Monetary::from_str("1.5")?;
    let monetary_value_2 = Monetary::from_str("2.5")?;
    monetary_value_1 += monetary_value_2;

    assert_eq!(monetary_value_1.to_string(), "4.00");

    monetary_value_1 -= Monetary::from_str("5.0")?;

    assert_eq!(monetary_value_1.to_string(), "-1.00");

    Ok(())
}

#[test]
fn test_monetary_keeps_full_precision_across_arithmetic() -> Result<()> {
    let mut total = Monetary::new();

    for _ in 0..3 {
        total += Monetary::from_str("0.004")?;
    }

    assert_eq!(total, Monetary::from_str("0.012")?);
    assert_eq!(total.to_string(), "0.01");

    Ok(())
}

#[test]
fn test_monetary_positivity() -> Result<()> {
    assert!(Monetary::from_str("0.01")?.is_positive());
    assert!(!Monetary::from_str("0")?.is_positive());
    assert!(!Monetary::from_str("0.00")?.is_positive());
    assert!(!Monetary::from_str("-5.00")?.is_positive());

    Ok(())
}

#[test]
fn test_monetary_rejects_amounts_beyond_the_supported_range() -> Result<()> {
    assert!(matches!(Monetary::from_str("79228162514264337593543950335"), Err(MonetaryError::Overflow)));
    assert!(matches!(Monetary::from_str("1000000000000000.01"), Err(MonetaryError::Overflow)));
    assert!(matches!(Monetary::from_str("-1000000000000001"), Err(MonetaryError::Overflow)));
    assert!(matches!(Monetary::from_str("1e20"), Err(MonetaryError::Overflow)));

    assert_eq!(Monetary::from_str("1000000000000000")?.to_string(), "1000000000000000.00");

    Ok(())
}

#[test]
fn test_monetary_sums_of_largest_amounts_stay_exact_with_two_decimals() -> Result<()> {
    let largest = Monetary::from_str("1000000000000000")?;
    let mut total = Monetary::new();

    for _ in 0..1000 {
        total += largest;
    }

    assert_eq!(total.to_string(), "1000000000000000000.00");

    total -= Monetary::from_str("0.01")?;

    assert_eq!(total.to_string(), "999999999999999999.99");

    Ok(())
}
