pub mod estimator;
pub mod model;
pub mod rate;
pub mod shared;

pub mod prelude {
    pub use crate::estimator::{
        Bracket, Error, Estimate, Estimator, Fare, GroupDiscount, InvalidTrip, Quote, Timing,
        price,
    };
    pub use crate::model::{Cards, DiscountCard, Passenger, TripDetails, TripRequest};
    pub use crate::rate::{FixedRate, RateProvider, RateTable};
    pub use crate::shared::{Lead, Money};
}
