mod card;
pub use card::*;

use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub when: DateTime<Utc>,
}

impl TripDetails {
    pub fn new(from: &str, to: &str, when: DateTime<Utc>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            when,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passenger {
    /// Years, fractional for infants.
    pub age: f64,
    pub cards: Cards,
    /// Only consulted when someone in the request holds a Family card.
    pub last_name: Option<Arc<str>>,
}

impl Passenger {
    pub fn new(age: f64) -> Self {
        Self {
            age,
            ..Default::default()
        }
    }

    pub fn with_card(mut self, card: DiscountCard) -> Self {
        self.cards.insert(card);
        self
    }

    pub fn with_cards<I: IntoIterator<Item = DiscountCard>>(mut self, cards: I) -> Self {
        cards.into_iter().for_each(|card| self.cards.insert(card));
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn holds(&self, card: DiscountCard) -> bool {
        self.cards.holds(card)
    }

    /// The trimmed last name, `None` when unset or blank.
    pub fn surname(&self) -> Option<&str> {
        self.last_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// One pricing call: passengers in the order the caller gave them plus the
/// trip they all take.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub passengers: Vec<Passenger>,
    pub details: TripDetails,
}

impl TripRequest {
    pub fn new(details: TripDetails) -> Self {
        Self {
            passengers: Vec::new(),
            details,
        }
    }

    pub fn with_passenger(mut self, passenger: Passenger) -> Self {
        self.passengers.push(passenger);
        self
    }

    pub fn with_passengers<I: IntoIterator<Item = Passenger>>(mut self, passengers: I) -> Self {
        self.passengers.extend(passengers);
        self
    }
}
