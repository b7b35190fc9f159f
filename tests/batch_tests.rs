use chrono::{DateTime, Duration, TimeZone, Utc};
use farebox::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

fn request(from: &str, days: i64, age: f64) -> TripRequest {
    let details = TripDetails::new(from, "Paris", now() + Duration::days(days));
    TripRequest::new(details).with_passenger(Passenger::new(age))
}

#[test]
fn batch_keeps_order_test() {
    let estimator = Estimator::new(FixedRate::from(100.0));
    let requests: Vec<_> = (0..64)
        .map(|i| match i % 4 {
            0 => request("Bordeaux", 24, 25.0),
            1 => request("Bordeaux", 30, 25.0),
            2 => request("", 30, 25.0),
            _ => request("Bordeaux", 24, -1.0),
        })
        .collect();

    let results = estimator.estimate_many(&requests, now());
    assert_eq!(results.len(), requests.len());
    for (i, result) in results.iter().enumerate() {
        match i % 4 {
            0 => assert!(result.as_ref().unwrap().approx_eq(Money::new(112.0), 1e-9)),
            1 => assert!(result.as_ref().unwrap().approx_eq(Money::new(100.0), 1e-9)),
            2 => assert!(matches!(
                result,
                Err(Error::InvalidTrip(InvalidTrip::StartCity))
            )),
            _ => assert!(matches!(result, Err(Error::InvalidTrip(InvalidTrip::Age)))),
        }
    }
}

#[test]
fn batch_empty_test() {
    let estimator = Estimator::new(FixedRate::from(100.0));
    assert!(estimator.estimate_many(&[], now()).is_empty());
}
