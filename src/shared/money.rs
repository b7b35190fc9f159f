use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

use serde::Serialize;

/// An amount in the base currency. Intermediate values may go negative while
/// discounts are subtracted, nothing clamps them.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Money(f64);

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Mul<f64> for Money {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.2}", self.0))
    }
}

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// A usable price from a rate source: finite and strictly positive.
    pub fn is_price(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Equality within a tolerance, for comparing computed fares.
    pub fn approx_eq(&self, other: Money, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

#[test]
fn money_display_test() {
    assert_eq!(Money::new(112.0).to_string(), "112.00");
    assert_eq!(Money::new(0.126).to_string(), "0.13");
}

#[test]
fn money_sum_test() {
    let total: Money = [Money::new(9.0), Money::new(72.0), Money::ZERO]
        .into_iter()
        .sum();
    assert_eq!(total, Money::new(81.0))
}

#[test]
fn money_price_test() {
    assert!(Money::new(100.0).is_price());
    assert!(!Money::ZERO.is_price());
    assert!(!Money::new(-1.0).is_price());
    assert!(!Money::new(f64::NAN).is_price());
    assert!(!Money::new(f64::INFINITY).is_price());
}
