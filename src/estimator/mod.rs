mod group;
mod passenger;
mod quote;
mod validation;

pub use group::GroupDiscount;
pub use passenger::{Bracket, TODDLER_FARE, TRAIN_STROKE_FARE, Timing};
pub use quote::*;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    model::TripRequest,
    rate::{self, RateProvider},
    shared::{Lead, Money},
};
use group::Group;

/// Why a request cannot be priced. The message is meant for the end user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTrip {
    #[error("Start city is invalid")]
    StartCity,
    #[error("Destination city is invalid")]
    DestinationCity,
    #[error("Date is invalid")]
    Date,
    #[error("Age is invalid")]
    Age,
    #[error("Last name is required for Family discount")]
    MissingLastName,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Rate unavailable: {0}")]
    RateUnavailable(#[from] rate::Error),
    #[error("{0}")]
    InvalidTrip(#[from] InvalidTrip),
}

/// Prices a request against an already fetched basic rate.
///
/// Pure: the same request, rate and `now` always give the same quote. An
/// empty passenger list is free and skips every check.
pub fn price(
    request: &TripRequest,
    basic_rate: Money,
    now: DateTime<Utc>,
) -> Result<Quote, Error> {
    if request.passengers.is_empty() {
        return Ok(Quote::empty(basic_rate));
    }
    validation::validate(&request.details, now)?;

    let lead = Lead::between(now, request.details.when);
    let group = Group::of(&request.passengers);
    let fares = request
        .passengers
        .iter()
        .enumerate()
        .map(|(i, passenger)| passenger::fare(i, passenger, &group, lead, basic_rate))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Quote::new(basic_rate, fares, group.discount()))
}

pub struct Estimator<P> {
    provider: P,
}

impl<P: RateProvider> Estimator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Starts an estimate. `now` is captured here, once, and shared by every
    /// check and passenger of the request.
    pub fn request<'a>(&'a self, request: &'a TripRequest) -> Estimate<'a, P> {
        Estimate {
            provider: &self.provider,
            request,
            now: Utc::now(),
        }
    }

    pub fn estimate(&self, request: &TripRequest) -> Result<Money, Error> {
        self.request(request).total()
    }

    /// Estimates independent requests in parallel. Results keep input order.
    pub fn estimate_many(
        &self,
        requests: &[TripRequest],
        now: DateTime<Utc>,
    ) -> Vec<Result<Money, Error>>
    where
        P: Sync,
    {
        requests
            .par_iter()
            .map(|request| self.request(request).at(now).total())
            .collect()
    }
}

pub struct Estimate<'a, P> {
    provider: &'a P,
    request: &'a TripRequest,
    now: DateTime<Utc>,
}

impl<'a, P: RateProvider> Estimate<'a, P> {
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn quote(self) -> Result<Quote, Error> {
        let details = &self.request.details;
        let basic_rate = self.provider.basic_rate(details).inspect_err(|err| {
            warn!("No rate for {} -> {}: {err}", details.from, details.to);
        })?;
        if !basic_rate.is_price() {
            warn!(
                "Rejected rate {basic_rate} for {} -> {}",
                details.from, details.to
            );
            return Err(rate::Error::InvalidPrice(basic_rate.as_f64()).into());
        }
        debug!(
            "Basic rate for {} -> {} is {basic_rate}",
            details.from, details.to
        );

        let quote = price(self.request, basic_rate, self.now).inspect_err(|err| {
            warn!("Rejected trip {} -> {}: {err}", details.from, details.to);
        })?;
        debug!(
            "Quoted {} passengers for {} -> {}: {}",
            quote.fares.len(),
            details.from,
            details.to,
            quote.total
        );
        Ok(quote)
    }

    pub fn total(self) -> Result<Money, Error> {
        Ok(self.quote()?.total)
    }
}
