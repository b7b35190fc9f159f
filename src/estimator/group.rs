use serde::Serialize;
use std::collections::HashSet;

use crate::{
    model::{DiscountCard, Passenger},
    shared::Money,
};

const COUPLE_DISCOUNT: f64 = 0.4;
const HALF_COUPLE_DISCOUNT: f64 = 0.1;
const ADULT_AGE: f64 = 18.0;

/// Discounts that depend on the whole passenger list, applied to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupDiscount {
    /// Two adults, one of them with a Couple card. 20% of the basic rate each.
    Couple,
    /// A lone adult with a HalfCouple card.
    HalfCouple,
}

impl GroupDiscount {
    pub fn amount(self, basic_rate: Money) -> Money {
        match self {
            GroupDiscount::Couple => basic_rate * COUPLE_DISCOUNT,
            GroupDiscount::HalfCouple => basic_rate * HALF_COUPLE_DISCOUNT,
        }
    }
}

/// Flags about the passenger list, computed once per request.
#[derive(Debug, Default)]
pub(crate) struct Group<'a> {
    pub size: usize,
    pub is_couple: bool,
    pub is_half_couple: bool,
    pub has_minor: bool,
    /// Someone holds a Family card. Suppresses the Senior and TrainStroke
    /// cards for everyone, and both couple discounts.
    pub is_family: bool,
    family_names: HashSet<&'a str>,
}

impl<'a> Group<'a> {
    pub fn of(passengers: &'a [Passenger]) -> Self {
        let mut group = Group {
            size: passengers.len(),
            ..Default::default()
        };
        for passenger in passengers {
            group.is_couple |= passenger.holds(DiscountCard::Couple);
            group.is_half_couple |= passenger.holds(DiscountCard::HalfCouple);
            group.has_minor |= passenger.age < ADULT_AGE;
            if passenger.holds(DiscountCard::Family) {
                group.is_family = true;
                if let Some(surname) = passenger.surname() {
                    group.family_names.insert(surname);
                }
            }
        }
        group
    }

    /// Someone sharing this surname holds a Family card.
    pub fn is_family_name(&self, surname: &str) -> bool {
        self.family_names.contains(surname)
    }

    pub fn discount(&self) -> Option<GroupDiscount> {
        if self.is_family || self.has_minor {
            return None;
        }
        match self.size {
            2 if self.is_couple => Some(GroupDiscount::Couple),
            1 if self.is_half_couple => Some(GroupDiscount::HalfCouple),
            _ => None,
        }
    }
}

#[test]
fn couple_needs_two_adults_test() {
    let passengers = [
        Passenger::new(30.0).with_card(DiscountCard::Couple),
        Passenger::new(31.0),
    ];
    assert_eq!(Group::of(&passengers).discount(), Some(GroupDiscount::Couple));
    assert_eq!(Group::of(&passengers[..1]).discount(), None);
}

#[test]
fn minor_cancels_couple_test() {
    let passengers = [
        Passenger::new(30.0).with_card(DiscountCard::Couple),
        Passenger::new(17.5),
    ];
    let group = Group::of(&passengers);
    assert!(group.has_minor);
    assert_eq!(group.discount(), None);
}

#[test]
fn family_cancels_half_couple_test() {
    let passengers = [Passenger::new(40.0)
        .with_cards([DiscountCard::HalfCouple, DiscountCard::Family])
        .with_last_name("Martin")];
    let group = Group::of(&passengers);
    assert!(group.is_family);
    assert!(group.is_family_name("Martin"));
    assert_eq!(group.discount(), None);
}

#[test]
fn family_names_are_trimmed_test() {
    let passengers = [Passenger::new(40.0)
        .with_card(DiscountCard::Family)
        .with_last_name("  Martin ")];
    let group = Group::of(&passengers);
    assert!(group.is_family_name("Martin"));
    assert!(!group.is_family_name("martin"));
}
