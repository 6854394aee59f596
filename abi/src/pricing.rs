use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{DateRange, Error, QuoteResponse};

/// Price of a validated date range at a daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub range: DateRange,
    pub days: i64,
    pub price_per_day: Decimal,
    pub total: Decimal,
}

impl Quote {
    pub fn new(range: DateRange, price_per_day: Decimal) -> Result<Self, Error> {
        let total = price(&range, price_per_day)?;
        Ok(Self {
            range,
            days: range.days(),
            price_per_day,
            total,
        })
    }
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            days: quote.days,
            price_per_day: quote.price_per_day.to_string(),
            total_price: quote.total.to_string(),
        }
    }
}

/// Total for `range` at `price_per_day`, both ends of the range charged.
/// Rounded half-up to cents.
pub fn price(range: &DateRange, price_per_day: Decimal) -> Result<Decimal, Error> {
    if price_per_day <= Decimal::ZERO {
        return Err(Error::InvalidInput("price per day must be positive".into()));
    }
    if range.is_inverted() {
        return Err(Error::InvalidInput(
            "end date cannot be before start date".into(),
        ));
    }

    let total = Decimal::from(range.days())
        .checked_mul(price_per_day)
        .ok_or_else(|| Error::InvalidInput("total price is too large".into()))?;

    let mut total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(2);
    if total > max_amount() {
        return Err(Error::InvalidInput(format!(
            "total price {} exceeds {}",
            total,
            max_amount()
        )));
    }
    Ok(total)
}

/// parse a positive decimal amount such as "25.50"
pub fn parse_price(s: &str) -> Result<Decimal, Error> {
    let amount = Decimal::from_str(s.trim())
        .map_err(|_| Error::InvalidInput(format!("invalid price: `{}`", s)))?;
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidInput("price per day must be positive".into()));
    }
    if amount > max_amount() {
        return Err(Error::InvalidInput(format!(
            "price {} exceeds {}",
            amount,
            max_amount()
        )));
    }
    Ok(amount)
}

/// the largest amount a `numeric(12, 2)` money column holds
fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}
