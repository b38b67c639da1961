extern crate structopt;

use clap::arg_enum;
use log::{debug, error};
use prettytable::{cell, format, row, Table};
use std::io::{self, Write};
use std::path::PathBuf;
use stderrlog;
use structopt::{clap, StructOpt};

use trainfinder::date::format_time;
use trainfinder::prompt::{read_param, ARRIVAL_PROMPT, CRITERIA_PROMPT, DEPARTURE_PROMPT};
use trainfinder::{find_trains, Train};

static NOT_FOUND_MESSAGE: &str = "Can't find trains on request. Please, try again.";

arg_enum! {
    #[derive(Debug)]
    enum Output {
        Table,
        Json,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "trainfinder")]
struct Opt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    /// JSON file with all known trains
    #[structopt(short, long, parse(from_os_str), default_value = "data.json")]
    data: PathBuf,

    /// Departure station ID, asked for when not given
    #[structopt(short, long, value_name = "ID")]
    from: Option<String>,

    /// Arrival station ID, asked for when not given
    #[structopt(short, long, value_name = "ID")]
    to: Option<String>,

    /// How results should be sorted (price, arrival-time or departure-time), asked for when not given
    #[structopt(short, long, value_name = "CRITERIA")]
    sort_by: Option<String>,

    /// How results should be printed
    #[structopt(short, long, possible_values = &Output::variants(), case_insensitive = true, default_value = "table")]
    output: Output,
}

fn main() {
    let opt = Opt::from_args();
    setup_logging(opt.verbose);

    debug!("Parsed opts: {:#?}", opt);

    let (from, to, sort_by) = match read_query(&opt) {
        Ok(res) => res,
        Err(err) => {
            error!("Could not read query: {}", err);
            std::process::exit(1);
        }
    };

    let trains = match find_trains(&from, &to, &sort_by, &opt.data) {
        Ok(res) => res,
        Err(err) if err.is_input_error() => {
            clap::Error::value_validation_auto(err.to_string()).exit()
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    if trains.is_empty() {
        println!("{}", NOT_FOUND_MESSAGE);
        return;
    }

    match opt.output {
        Output::Table => {
            format_results(&trains).printstd();
        }
        Output::Json => match serde_json::to_string_pretty(&trains) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!("Could not serialize trains: {}", err);
                std::process::exit(1);
            }
        },
    }
}

/// Takes query parameters from the command line, prompting for any that
/// are missing.
fn read_query(opt: &Opt) -> io::Result<(String, String, String)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut param = |given: &Option<String>, prompt: &str| match given {
        Some(value) => Ok(value.clone()),
        None => read_param(&mut input, &mut output, prompt),
    };

    let from = param(&opt.from, DEPARTURE_PROMPT)?;
    let to = param(&opt.to, ARRIVAL_PROMPT)?;
    let sort_by = param(&opt.sort_by, CRITERIA_PROMPT)?;
    output.flush()?;

    Ok((from, to, sort_by))
}

fn format_results(trains: &[Train]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Train", "From", "To", "Price", "Departure", "Arrival"]);

    for train in trains.iter() {
        table.add_row(row![
            train.train_id,
            train.departure_station_id,
            train.arrival_station_id,
            format!("{:.2}", train.price),
            format_time(&train.departure_time),
            format_time(&train.arrival_time)
        ]);
    }
    table
}

fn setup_logging(level: usize) {
    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .module("trainfinder")
        .verbosity(level)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
    {
        eprintln!("Could not set up logging: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_format_results() {
        let trains = vec![Train {
            train_id: 978,
            departure_station_id: 1902,
            arrival_station_id: 1929,
            price: 258.53,
            arrival_time: NaiveTime::from_hms_opt(4, 15, 0),
            departure_time: NaiveTime::from_hms_opt(13, 10, 0),
        }];

        let rendered = format_results(&trains).to_string();

        assert!(rendered.contains("Departure"));
        assert!(rendered.contains("978"));
        assert!(rendered.contains("258.53"));
        assert!(rendered.contains("13:10:00"));
        assert!(rendered.contains("04:15:00"));
    }

    #[test]
    fn test_format_results_unknown_time() {
        let trains = vec![Train {
            train_id: 3003,
            arrival_time: NaiveTime::from_hms_opt(9, 0, 0),
            ..Train::default()
        }];

        let rendered = format_results(&trains).to_string();

        assert!(rendered.contains("09:00:00"));
        assert!(rendered.contains(" - "));
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::from_iter(&["trainfinder", "-f", "1902", "--sort-by", "price"]);

        assert_eq!(opt.data, PathBuf::from("data.json"));
        assert_eq!(opt.from.as_deref(), Some("1902"));
        assert_eq!(opt.to, None);
        assert_eq!(opt.sort_by.as_deref(), Some("price"));
        assert!(matches!(opt.output, Output::Table));
    }

    #[test]
    fn test_opt_output_is_case_insensitive() {
        let opt = Opt::from_iter(&["trainfinder", "--output", "JSON"]);

        assert!(matches!(opt.output, Output::Json));
    }
}
