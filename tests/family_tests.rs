use chrono::{DateTime, Duration, TimeZone, Utc};
use farebox::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

fn quote(passengers: Vec<Passenger>) -> Result<Quote, Error> {
    let estimator = Estimator::new(FixedRate::from(100.0));
    let details = TripDetails::new("Lyon", "Marseille", now() + Duration::days(24));
    let request = TripRequest::new(details).with_passengers(passengers);
    estimator.request(&request).at(now()).quote()
}

fn holder(age: f64, last_name: &str) -> Passenger {
    Passenger::new(age)
        .with_card(DiscountCard::Family)
        .with_last_name(last_name)
}

fn assert_total(total: Money, expected: f64) {
    assert!(
        total.approx_eq(expected.into(), 1e-9),
        "expected {expected}, got {total}"
    );
}

#[test]
fn family_suppresses_senior_card_test() {
    let passenger = holder(72.0, "Durand").with_card(DiscountCard::Senior);
    let quote = quote(vec![passenger]).unwrap();
    assert_total(quote.total, 42.0);
}

#[test]
fn same_surname_shares_discount_test() {
    let quote = quote(vec![
        holder(40.0, "Durand"),
        Passenger::new(35.0).with_last_name("Durand"),
    ])
    .unwrap();
    assert_total(quote.fares[0].family_discount, 30.0);
    assert_total(quote.fares[1].family_discount, 30.0);
    assert_total(quote.total, 164.0);
}

#[test]
fn other_surname_pays_full_test() {
    let quote = quote(vec![
        holder(40.0, "Durand"),
        Passenger::new(35.0).with_last_name("Petit"),
    ])
    .unwrap();
    assert_total(quote.fares[1].family_discount, 0.0);
    assert_total(quote.total, 194.0);
}

#[test]
fn surnames_are_trimmed_test() {
    let quote = quote(vec![
        holder(40.0, "Durand "),
        Passenger::new(35.0).with_last_name(" Durand"),
    ])
    .unwrap();
    assert_total(quote.total, 164.0);
}

#[test]
fn missing_last_name_test() {
    let result = quote(vec![holder(40.0, "Durand"), Passenger::new(35.0)]);
    assert!(matches!(
        result,
        Err(Error::InvalidTrip(InvalidTrip::MissingLastName))
    ));
}

#[test]
fn blank_last_name_test() {
    let result = quote(vec![holder(40.0, "   ")]);
    assert!(matches!(
        result,
        Err(Error::InvalidTrip(InvalidTrip::MissingLastName))
    ));
}

#[test]
fn family_suppresses_couple_test() {
    let quote = quote(vec![
        holder(30.0, "Durand").with_card(DiscountCard::Couple),
        Passenger::new(32.0).with_last_name("Durand"),
    ])
    .unwrap();
    assert_eq!(quote.group_discount, None);
    assert_total(quote.total, 164.0);
}

#[test]
fn family_suppresses_half_couple_test() {
    let quote = quote(vec![
        holder(30.0, "Durand").with_card(DiscountCard::HalfCouple),
    ])
    .unwrap();
    assert_eq!(quote.group_discount, None);
    assert_total(quote.total, 82.0);
}

#[test]
fn family_suppresses_train_stroke_test() {
    let quote = quote(vec![
        Passenger::new(25.0)
            .with_card(DiscountCard::TrainStroke)
            .with_last_name("Durand"),
        holder(40.0, "Durand"),
    ])
    .unwrap();
    assert_eq!(quote.fares[0].timing, Some(Timing::Surcharge { days: 24 }));
    assert_total(quote.total, 164.0);
}

#[test]
fn toddler_fare_gets_family_discount_test() {
    let quote = quote(vec![
        holder(40.0, "Durand"),
        Passenger::new(2.0).with_last_name("Durand"),
    ])
    .unwrap();
    assert_total(quote.fares[1].amount, -21.0);
    assert_total(quote.total, 61.0);
}

#[test]
fn infant_needs_no_last_name_test() {
    let quote = quote(vec![holder(40.0, "Durand"), Passenger::new(0.5)]).unwrap();
    assert_total(quote.total, 82.0);
}

#[test]
fn first_violation_wins_test() {
    let result = quote(vec![
        Passenger::new(35.0),
        Passenger::new(-3.0).with_last_name("Durand"),
        holder(40.0, "Durand"),
    ]);
    assert!(matches!(
        result,
        Err(Error::InvalidTrip(InvalidTrip::MissingLastName))
    ));

    let result = quote(vec![
        Passenger::new(-3.0).with_last_name("Durand"),
        Passenger::new(35.0),
        holder(40.0, "Durand"),
    ]);
    assert!(matches!(result, Err(Error::InvalidTrip(InvalidTrip::Age))));
}

#[test]
fn empty_last_names_are_missing_test() {
    let result = quote(vec![
        holder(40.0, ""),
        Passenger::new(38.0).with_last_name(""),
    ]);
    assert!(matches!(
        result,
        Err(Error::InvalidTrip(InvalidTrip::MissingLastName))
    ));
}
