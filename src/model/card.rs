use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscountCard {
    Senior,
    Couple,
    HalfCouple,
    /// Disability and reduced-mobility card.
    TrainStroke,
    Family,
}

impl DiscountCard {
    pub const ALL: [DiscountCard; 5] = [
        DiscountCard::Senior,
        DiscountCard::Couple,
        DiscountCard::HalfCouple,
        DiscountCard::TrainStroke,
        DiscountCard::Family,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The cards held by one passenger. Holding a card twice means nothing more
/// than holding it once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cards(u8);

impl Cards {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, card: DiscountCard) {
        self.0 |= card.bit();
    }

    pub const fn holds(&self, card: DiscountCard) -> bool {
        self.0 & card.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = DiscountCard> + '_ {
        DiscountCard::ALL
            .into_iter()
            .filter(move |card| self.holds(*card))
    }
}

impl FromIterator<DiscountCard> for Cards {
    fn from_iter<T: IntoIterator<Item = DiscountCard>>(iter: T) -> Self {
        let mut cards = Cards::empty();
        iter.into_iter().for_each(|card| cards.insert(card));
        cards
    }
}

impl<const N: usize> From<[DiscountCard; N]> for Cards {
    fn from(value: [DiscountCard; N]) -> Self {
        value.into_iter().collect()
    }
}

#[test]
fn cards_duplicates_test() {
    let cards = Cards::from([DiscountCard::Senior, DiscountCard::Senior]);
    assert_eq!(cards.iter().count(), 1);
    assert!(cards.holds(DiscountCard::Senior));
    assert!(!cards.holds(DiscountCard::Family));
}

#[test]
fn cards_iter_test() {
    let cards = Cards::from([DiscountCard::Family, DiscountCard::Couple]);
    let held: Vec<_> = cards.iter().collect();
    assert_eq!(held, vec![DiscountCard::Couple, DiscountCard::Family]);
}
