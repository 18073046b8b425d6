// Donation amount.
// Clients send amounts as either a JSON number or a string; both are
// accepted and normalized to a decimal before any threshold comparison.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A monetary amount as submitted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Amount in the smallest currency unit, rounded to two decimal
    /// places half-away-from-zero first so "0.999" and 0.999 compare
    /// identically against the platform minimum.
    pub fn in_cents(&self) -> i64 {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        (rounded * Decimal::from(100)).to_i64().unwrap_or(i64::MAX)
    }

    /// Threshold comparison in smallest-unit space.
    pub fn meets_minimum(&self, minimum: Decimal) -> bool {
        self.in_cents() >= Amount(minimum).in_cents()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => Decimal::from_f64(n)
                .map(Amount)
                .ok_or_else(|| D::Error::custom("amount is not a finite number")),
            RawAmount::Text(s) => s
                .trim()
                .parse::<Decimal>()
                .map(Amount)
                .map_err(|_| D::Error::custom("amount is not a valid decimal")),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Amount {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_amount_accepts_number_and_string() {
        assert_eq!(parse("10").value(), Decimal::from(10));
        assert_eq!(parse("\"10\"").value(), Decimal::from(10));
        assert_eq!(parse("\" 2.50 \"").value(), Decimal::new(250, 2));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(serde_json::from_str::<Amount>("\"ten dollars\"").is_err());
        assert!(serde_json::from_str::<Amount>("true").is_err());
    }

    #[test]
    fn test_in_cents_rounds_to_smallest_unit() {
        assert_eq!(parse("1").in_cents(), 100);
        assert_eq!(parse("\"0.999\"").in_cents(), 100);
        assert_eq!(parse("\"0.994\"").in_cents(), 99);
        assert_eq!(parse("10.005").in_cents(), 1001);
    }

    #[test]
    fn test_meets_minimum() {
        let minimum = Decimal::new(100, 2); // 1.00
        assert!(parse("1").meets_minimum(minimum));
        assert!(parse("\"0.999\"").meets_minimum(minimum));
        assert!(!parse("\"0.99\"").meets_minimum(minimum));
        assert!(!parse("0.5").meets_minimum(minimum));
    }
}
