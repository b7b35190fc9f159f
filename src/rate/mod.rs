use std::io;
use thiserror::Error;

mod config;
mod table;
pub use config::*;
pub use table::*;

use crate::{model::TripDetails, shared::Money};

#[derive(Error, Debug)]
pub enum Error {
    #[error("No price for {from} -> {to}")]
    NoPrice { from: String, to: String },
    #[error("Price {0} is not a usable rate")]
    InvalidPrice(f64),
    #[error("Rate source unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

/// Source of the undiscounted per-passenger fare for a route and date.
pub trait RateProvider {
    fn basic_rate(&self, details: &TripDetails) -> Result<Money, self::Error>;
}

impl<T: RateProvider + ?Sized> RateProvider for &T {
    fn basic_rate(&self, details: &TripDetails) -> Result<Money, self::Error> {
        (**self).basic_rate(details)
    }
}

impl<T: RateProvider + ?Sized> RateProvider for Box<T> {
    fn basic_rate(&self, details: &TripDetails) -> Result<Money, self::Error> {
        (**self).basic_rate(details)
    }
}

/// Same rate for every route and date.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(pub Money);

impl RateProvider for FixedRate {
    fn basic_rate(&self, _: &TripDetails) -> Result<Money, self::Error> {
        Ok(self.0)
    }
}

impl From<f64> for FixedRate {
    fn from(value: f64) -> Self {
        Self(value.into())
    }
}
