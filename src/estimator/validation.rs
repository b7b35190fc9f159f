use chrono::{DateTime, Utc};

use crate::{estimator::InvalidTrip, model::TripDetails};

/// Trip-level checks, first violation wins. Ages are checked later, one
/// passenger at a time.
pub(crate) fn validate(details: &TripDetails, now: DateTime<Utc>) -> Result<(), InvalidTrip> {
    if details.from.trim().is_empty() {
        return Err(InvalidTrip::StartCity);
    }
    if details.to.trim().is_empty() {
        return Err(InvalidTrip::DestinationCity);
    }
    if details.when < now {
        return Err(InvalidTrip::Date);
    }
    Ok(())
}
