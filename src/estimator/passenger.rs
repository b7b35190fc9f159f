use serde::Serialize;
use tracing::trace;

use crate::{
    estimator::{Fare, InvalidTrip, group::Group},
    model::{DiscountCard, Passenger},
    shared::{Lead, Money},
};

pub const TODDLER_FARE: Money = Money::new(9.0);
pub const TRAIN_STROKE_FARE: Money = Money::new(1.0);

const MINOR_SHARE: f64 = 0.6;
const ADULT_SHARE: f64 = 1.2;
const SENIOR_SHARE: f64 = 0.8;
const SENIOR_CARD_DISCOUNT: f64 = 0.2;

const EARLY_BOOKING_DAYS: i64 = 30;
const IMMINENT_HOURS: i64 = 6;
const EARLY_OR_IMMINENT_DISCOUNT: f64 = 0.2;
const SURCHARGE_FROM_DAYS: i64 = 5;
const SURCHARGE_PIVOT_DAYS: i64 = 20;
const SURCHARGE_PER_DAY: f64 = 0.02;

const FAMILY_DISCOUNT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bracket {
    Infant,
    Toddler,
    Minor,
    Adult,
    Senior,
}

impl Bracket {
    /// Rows are tried top to bottom, the first match wins.
    pub fn from_age(age: f64) -> Result<Self, InvalidTrip> {
        // NaN fails this too
        if !(age >= 0.0) {
            return Err(InvalidTrip::Age);
        }
        let bracket = match age {
            age if age < 1.0 => Bracket::Infant,
            age if age < 4.0 => Bracket::Toddler,
            age if age <= 17.0 => Bracket::Minor,
            age if age >= 70.0 => Bracket::Senior,
            _ => Bracket::Adult,
        };
        Ok(bracket)
    }

    fn rate(self, passenger: &Passenger, group: &Group, basic_rate: Money) -> Money {
        match self {
            Bracket::Infant => Money::ZERO,
            Bracket::Toddler => TODDLER_FARE,
            Bracket::Minor => basic_rate * MINOR_SHARE,
            Bracket::Adult => basic_rate * ADULT_SHARE,
            Bracket::Senior if passenger.holds(DiscountCard::Senior) && !group.is_family => {
                basic_rate * SENIOR_SHARE - basic_rate * SENIOR_CARD_DISCOUNT
            }
            Bracket::Senior => basic_rate * SENIOR_SHARE,
        }
    }
}

/// How the booking lead changes a bracketed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Timing {
    /// Toddlers keep their flat fare.
    Exempt,
    /// TrainStroke holders outside a Family group pay a flat fare.
    TrainStroke,
    /// Booked at least 30 days ahead, or departing within 6 hours.
    EarlyOrImminent,
    /// Between 5 and 29 days ahead; zero at 20 days, a discount beyond.
    Surcharge { days: i64 },
    /// Under 5 days ahead.
    LastMinute,
}

impl Timing {
    /// Rows are tried top to bottom, the first match wins.
    pub(crate) fn for_passenger(
        bracket: Bracket,
        passenger: &Passenger,
        group: &Group,
        lead: Lead,
    ) -> Self {
        match lead {
            _ if bracket == Bracket::Toddler => Timing::Exempt,
            _ if passenger.holds(DiscountCard::TrainStroke) && !group.is_family => {
                Timing::TrainStroke
            }
            lead if lead.days() >= EARLY_BOOKING_DAYS || lead.hours() <= IMMINENT_HOURS => {
                Timing::EarlyOrImminent
            }
            lead if lead.days() >= SURCHARGE_FROM_DAYS => Timing::Surcharge { days: lead.days() },
            _ => Timing::LastMinute,
        }
    }

    fn apply(self, rate: Money, basic_rate: Money) -> Money {
        match self {
            Timing::Exempt => rate,
            Timing::TrainStroke => TRAIN_STROKE_FARE,
            Timing::EarlyOrImminent => rate - basic_rate * EARLY_OR_IMMINENT_DISCOUNT,
            Timing::Surcharge { days } => {
                rate + basic_rate * ((SURCHARGE_PIVOT_DAYS - days) as f64 * SURCHARGE_PER_DAY)
            }
            Timing::LastMinute => rate + basic_rate,
        }
    }
}

/// Prices one passenger: bracket, then timing, then the Family reduction.
pub(crate) fn fare(
    index: usize,
    passenger: &Passenger,
    group: &Group,
    lead: Lead,
    basic_rate: Money,
) -> Result<Fare, InvalidTrip> {
    let bracket = Bracket::from_age(passenger.age)?;
    if bracket == Bracket::Infant {
        trace!("Passenger {index} travels free");
        return Ok(Fare {
            passenger: index,
            bracket,
            timing: None,
            family_discount: Money::ZERO,
            amount: Money::ZERO,
        });
    }

    let timing = Timing::for_passenger(bracket, passenger, group, lead);
    let rate = timing.apply(bracket.rate(passenger, group, basic_rate), basic_rate);
    let family_discount = family_discount(passenger, group, basic_rate)?;
    let amount = rate - family_discount;
    trace!("Passenger {index} ({bracket:?}, {timing:?}) pays {amount}");
    Ok(Fare {
        passenger: index,
        bracket,
        timing: Some(timing),
        family_discount,
        amount,
    })
}

fn family_discount(
    passenger: &Passenger,
    group: &Group,
    basic_rate: Money,
) -> Result<Money, InvalidTrip> {
    if !group.is_family {
        return Ok(Money::ZERO);
    }
    let surname = passenger.surname().ok_or(InvalidTrip::MissingLastName)?;
    if group.is_family_name(surname) {
        Ok(basic_rate * FAMILY_DISCOUNT)
    } else {
        Ok(Money::ZERO)
    }
}

#[cfg(test)]
fn timing_for(age: f64, cards: &[DiscountCard], lead: Lead) -> Timing {
    let passengers = [Passenger::new(age).with_cards(cards.iter().copied())];
    let group = Group::of(&passengers);
    let bracket = Bracket::from_age(age).unwrap();
    Timing::for_passenger(bracket, &passengers[0], &group, lead)
}

#[test]
fn toddler_exempt_before_train_stroke_test() {
    let lead = Lead::from_parts(2, 48);
    let cards = [DiscountCard::TrainStroke];
    assert_eq!(timing_for(2.0, &cards, lead), Timing::Exempt);
    assert_eq!(timing_for(30.0, &cards, lead), Timing::TrainStroke);
}

#[test]
fn family_lifts_train_stroke_test() {
    let lead = Lead::from_parts(2, 48);
    let cards = [DiscountCard::TrainStroke, DiscountCard::Family];
    let passengers = [Passenger::new(30.0).with_cards(cards).with_last_name("Roux")];
    let group = Group::of(&passengers);
    let timing = Timing::for_passenger(Bracket::Adult, &passengers[0], &group, lead);
    assert_eq!(timing, Timing::LastMinute);
}

#[test]
fn lead_rows_in_order_test() {
    let lead = |days, hours| timing_for(30.0, &[], Lead::from_parts(days, hours));
    assert_eq!(lead(30, 720), Timing::EarlyOrImminent);
    assert_eq!(lead(1, 6), Timing::EarlyOrImminent);
    assert_eq!(lead(1, 7), Timing::LastMinute);
    assert_eq!(lead(5, 120), Timing::Surcharge { days: 5 });
    assert_eq!(lead(4, 96), Timing::LastMinute);
}

#[test]
fn brackets_by_age_test() {
    assert_eq!(Bracket::from_age(0.0), Ok(Bracket::Infant));
    assert_eq!(Bracket::from_age(0.99), Ok(Bracket::Infant));
    assert_eq!(Bracket::from_age(1.0), Ok(Bracket::Toddler));
    assert_eq!(Bracket::from_age(4.0), Ok(Bracket::Minor));
    assert_eq!(Bracket::from_age(17.0), Ok(Bracket::Minor));
    assert_eq!(Bracket::from_age(17.5), Ok(Bracket::Adult));
    assert_eq!(Bracket::from_age(70.0), Ok(Bracket::Senior));
    assert_eq!(Bracket::from_age(-0.1), Err(InvalidTrip::Age));
}

#[test]
fn surcharge_turns_into_discount_test() {
    let basic_rate = Money::new(100.0);
    let rate = Money::new(120.0);
    let later = Timing::Surcharge { days: 24 }.apply(rate, basic_rate);
    let sooner = Timing::Surcharge { days: 5 }.apply(rate, basic_rate);
    assert!(later.approx_eq(Money::new(112.0), 1e-9));
    assert!(sooner.approx_eq(Money::new(150.0), 1e-9));
}
