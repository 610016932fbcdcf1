use std::fmt;

use clap::Parser;

/// Billing dates printed when no schedule is given on the command line.
pub const DEMO_REQUESTS: [Request; 3] = [
    Request::new(5, 20, 2020),
    Request::new(15, 30, 2020),
    Request::new(15, 30, 2019),
];

/// Twice-monthly billing date calculator.
#[derive(Parser)]
#[command(
    name = "billing-date",
    version,
    about = "Two billing dates per month for a year, clamped to each month's length"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// First billing day of the month (1-31).
    #[arg(long, requires_all = ["second_day", "year"], allow_negative_numbers = true)]
    pub first_day: Option<i32>,

    /// Second billing day of the month (1-31).
    #[arg(long, requires_all = ["first_day", "year"], allow_negative_numbers = true)]
    pub second_day: Option<i32>,

    /// Calendar year to bill (1-9999).
    #[arg(long, requires_all = ["first_day", "second_day"], allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Bill December too instead of stopping after November.
    #[arg(long)]
    pub through_december: bool,

    /// Print each schedule as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The schedule given on the command line, or the demonstration set.
    pub fn requests(&self) -> Vec<Request> {
        match (self.first_day, self.second_day, self.year) {
            (Some(first_day), Some(second_day), Some(year)) => {
                vec![Request::new(first_day, second_day, year)]
            }
            _ => DEMO_REQUESTS.to_vec(),
        }
    }
}

/// One billing schedule to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub first_day:  i32,
    pub second_day: i32,
    pub year:       i32,
}

impl Request {
    pub const fn new(first_day: i32, second_day: i32, year: i32) -> Self {
        Self {
            first_day,
            second_day,
            year,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "days {} and {} of {}",
            self.first_day, self.second_day, self.year
        )
    }
}
