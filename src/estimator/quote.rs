use serde::Serialize;

use crate::{
    estimator::{Bracket, GroupDiscount, Timing},
    shared::Money,
};

/// What one passenger pays before group discounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fare {
    /// Position in the request.
    pub passenger: usize,
    pub bracket: Bracket,
    /// `None` for infants, who skip pricing entirely.
    pub timing: Option<Timing>,
    pub family_discount: Money,
    pub amount: Money,
}

/// A priced request: every passenger's fare in request order and the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub basic_rate: Money,
    pub fares: Vec<Fare>,
    pub group_discount: Option<GroupDiscount>,
    pub total: Money,
}

impl Quote {
    pub(crate) fn empty(basic_rate: Money) -> Self {
        Self {
            basic_rate,
            fares: Vec::new(),
            group_discount: None,
            total: Money::ZERO,
        }
    }

    pub(crate) fn new(
        basic_rate: Money,
        fares: Vec<Fare>,
        group_discount: Option<GroupDiscount>,
    ) -> Self {
        let mut total: Money = fares.iter().map(|fare| fare.amount).sum();
        if let Some(discount) = group_discount {
            total -= discount.amount(basic_rate);
        }
        Self {
            basic_rate,
            fares,
            group_discount,
            total,
        }
    }

    pub fn fare(&self, passenger: usize) -> Option<&Fare> {
        self.fares.get(passenger)
    }
}
