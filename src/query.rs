use log::info;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::process::{filter_trains, sort_trains, take_top};
use crate::trains::{load_trains, Train};

/// How many trains a query returns at most.
pub static MAX_RESULTS: usize = 3;
static MIN_STATION_ID: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("empty departure station")]
    EmptyDepartureStation,
    #[error("empty arrival station")]
    EmptyArrivalStation,
    #[error("bad departure station input")]
    BadDepartureStation,
    #[error("bad arrival station input")]
    BadArrivalStation,
    #[error("unsupported criteria")]
    UnsupportedCriteria,
    #[error("could not read dataset: {0}")]
    ReadError(io::Error),
    #[error("error while parsing dataset: {0}")]
    JsonParseError(serde_json::Error),
}

impl QueryError {
    /// True when the query itself was rejected, as opposed to the dataset
    /// failing to load.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            QueryError::ReadError(_) | QueryError::JsonParseError(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criteria {
    Price,
    ArrivalTime,
    DepartureTime,
}

impl Criteria {
    pub fn variants() -> [&'static str; 3] {
        ["price", "arrival-time", "departure-time"]
    }
}

impl FromStr for Criteria {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Criteria::Price),
            "arrival-time" => Ok(Criteria::ArrivalTime),
            "departure-time" => Ok(Criteria::DepartureTime),
            _ => Err(QueryError::UnsupportedCriteria),
        }
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Criteria::Price => "price",
            Criteria::ArrivalTime => "arrival-time",
            Criteria::DepartureTime => "departure-time",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq)]
pub struct Query {
    pub from: i64,
    pub to: i64,
    pub criteria: Criteria,
}

impl Query {
    /// Validates raw user input. Checks run in order and the first failure
    /// is returned.
    pub fn parse(departure: &str, arrival: &str, criteria: &str) -> Result<Query, QueryError> {
        if departure.is_empty() {
            return Err(QueryError::EmptyDepartureStation);
        }
        if arrival.is_empty() {
            return Err(QueryError::EmptyArrivalStation);
        }
        let from = parse_station(departure).ok_or(QueryError::BadDepartureStation)?;
        let to = parse_station(arrival).ok_or(QueryError::BadArrivalStation)?;
        let criteria = criteria.parse()?;

        Ok(Query { from, to, criteria })
    }

    pub fn run(&self, trains: Vec<Train>) -> Vec<Train> {
        let mut trains = filter_trains(trains, self.from, self.to);
        sort_trains(&mut trains, self.criteria);
        take_top(trains, MAX_RESULTS)
    }
}

fn parse_station(station: &str) -> Option<i64> {
    station.parse::<i64>().ok().filter(|id| *id >= MIN_STATION_ID)
}

/// Finds at most `MAX_RESULTS` trains from `departure` to `arrival` in the
/// dataset at `dataset`, cheapest or earliest first depending on `criteria`.
///
/// Input is validated before the dataset is read. No matching train is not an
/// error, the result is simply empty.
pub fn find_trains<P: AsRef<Path>>(
    departure: &str,
    arrival: &str,
    criteria: &str,
    dataset: P,
) -> Result<Vec<Train>, QueryError> {
    let query = Query::parse(departure, arrival, criteria)?;
    let trains = query.run(load_trains(dataset)?);
    info!("Found {} trains matching {:?}", trains.len(), query);
    Ok(trains)
}
