pub mod money;
pub mod time;

pub use money::*;
pub use time::*;

/// Normalizes a city or surname for comparisons and lookups.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
