use chrono::NaiveDate;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Seek},
    path::Path,
};
use tracing::debug;
use zip::{ZipArchive, read::ZipFile};

use crate::{
    model::TripDetails,
    rate::{self, Config, RateProvider},
    shared::{Money, normalize},
};

#[derive(Debug, Deserialize)]
struct RateRow {
    from: String,
    to: String,
    date: Option<NaiveDate>,
    price: f64,
}

#[derive(Debug, Default, Clone)]
struct RouteRates {
    undated: Option<Money>,
    dated: HashMap<NaiveDate, Money>,
}

/// Offline route table. A row without a date is the route's everyday rate, a
/// dated row overrides it for that departure day.
#[derive(Debug, Default, Clone)]
pub struct RateTable {
    routes: HashMap<(String, String), RouteRates>,
}

impl RateTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_rate(mut self, from: &str, to: &str, price: Money) -> Self {
        self.insert(from, to, None, price);
        self
    }

    pub fn with_dated_rate(mut self, from: &str, to: &str, date: NaiveDate, price: Money) -> Self {
        self.insert(from, to, Some(date), price);
        self
    }

    pub fn insert(&mut self, from: &str, to: &str, date: Option<NaiveDate>, price: Money) {
        let route = self
            .routes
            .entry((normalize(from), normalize(to)))
            .or_default();
        match date {
            Some(date) => {
                route.dated.insert(date, price);
            }
            None => route.undated = Some(price),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn from_reader<R: Read>(config: &Config, reader: R) -> Result<Self, rate::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(config.has_headers)
            .delimiter(config.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::new();
        for result in rdr.deserialize() {
            let row: RateRow = result?;
            table.insert(&row.from, &row.to, row.date, row.price.into());
        }
        debug!("Loaded {} routes", table.len());
        Ok(table)
    }

    pub fn from_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<Self, rate::Error> {
        let file = File::open(path)?;
        Self::from_reader(config, file)
    }

    /// Reads the sheet named by `config.file_name` out of a zip archive.
    pub fn from_zip<P: AsRef<Path>>(config: &Config, path: P) -> Result<Self, rate::Error> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let sheet = get_file(&mut archive, &config.file_name)?;
        Self::from_reader(config, sheet)
    }
}

impl RateProvider for RateTable {
    fn basic_rate(&self, details: &TripDetails) -> Result<Money, rate::Error> {
        let no_price = || rate::Error::NoPrice {
            from: details.from.to_string(),
            to: details.to.to_string(),
        };
        let route = self
            .routes
            .get(&(normalize(&details.from), normalize(&details.to)))
            .ok_or_else(no_price)?;
        route
            .dated
            .get(&details.when.date_naive())
            .copied()
            .or(route.undated)
            .ok_or_else(no_price)
    }
}

fn get_file<'a, R: Read + Seek>(
    archive: &'a mut ZipArchive<R>,
    name: &str,
) -> Result<ZipFile<'a, R>, rate::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(rate::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
