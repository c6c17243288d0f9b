use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 2;
/// Largest magnitude a parsed amount may have. Keeps any realistic number of
/// summed amounts far inside the range of `Decimal`, with room for two decimals.
const MAX_WHOLE_UNITS: i64 = 1_000_000_000_000_000;

/// A currency amount.
///
/// Arithmetic and storage keep the full precision of the underlying decimal;
/// only `Display` rounds to two decimal places.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Monetary(Decimal::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }
}

impl AddAssign<Monetary> for Monetary {
    fn add_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Monetary> for Monetary {
    fn sub_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary SubAssign error: Overflow")
        }
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut rounded = self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DECIMAL_PLACES);
        write!(formatter, "{}", rounded)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let parsed = if value.contains(['e', 'E']) {
            Decimal::from_scientific(value)
        } else {
            Decimal::from_str(value)
        };

        match parsed {
            Ok(decimal) if decimal.abs() > Decimal::from(MAX_WHOLE_UNITS) => Err(MonetaryError::Overflow),
            Ok(decimal) => Ok(Monetary(decimal)),
            Err(rust_decimal::Error::ExceedsMaximumPossibleValue)
            | Err(rust_decimal::Error::LessThanMinimumPossibleValue) => Err(MonetaryError::Overflow),
            Err(error) => Err(MonetaryError::InvalidFormat(format!("Value [{value}] is not a decimal number: {error}")))
        }
    }
}

// Persisted at full precision so a save/load cycle reproduces the exact amount.
impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.normalize())
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
