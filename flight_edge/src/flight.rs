use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A single scheduled flight along an edge.
///
/// Times are stored in the 24-hour numeric form they arrive in, e.g. `1430`
/// for 2:30 pm. They are not validated on insertion; use
/// [FlightDetail::departure_clock] and [FlightDetail::arrival_clock] to decode
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightDetail {
  /// Flight identifier, e.g. flight name plus tail number.
  flight: String,
  departure_time: i32,
  arrival_time: i32,
}

impl FlightDetail {
  pub fn new(
    flight: impl Into<String>,
    departure_time: i32,
    arrival_time: i32,
  ) -> FlightDetail {
    FlightDetail {
      flight: flight.into(),
      departure_time,
      arrival_time,
    }
  }

  /// Flight identifier, also the key this record is stored under.
  pub fn flight(&self) -> &str {
    &self.flight
  }

  /// Departure in 24-hour `HHMM` form.
  pub fn departure_time(&self) -> i32 {
    self.departure_time
  }

  /// Arrival in 24-hour `HHMM` form.
  pub fn arrival_time(&self) -> i32 {
    self.arrival_time
  }

  /// The times as a `(departure, arrival)` pair.
  pub fn as_pair(&self) -> (i32, i32) {
    (self.departure_time, self.arrival_time)
  }

  /// Decoded departure time; fails if it is not a valid `HHMM` value.
  pub fn departure_clock(&self) -> Result<ClockTime, Error> {
    ClockTime::try_from(self.departure_time)
  }

  /// Decoded arrival time; fails if it is not a valid `HHMM` value.
  pub fn arrival_clock(&self) -> Result<ClockTime, Error> {
    ClockTime::try_from(self.arrival_time)
  }

  /// Minutes between departure and arrival. An arrival that is earlier in the
  /// day than the departure is taken to land the next day.
  pub fn duration_minutes(&self) -> Result<u32, Error> {
    let dep = self.departure_clock()?.minutes_since_midnight();
    let arr = self.arrival_clock()?.minutes_since_midnight();
    if arr >= dep {
      Ok(arr - dep)
    } else {
      Ok(arr + MINUTES_PER_DAY - dep)
    }
  }
}

/// A time of day decoded from the 24-hour `HHMM` integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
  hour: u8,
  minute: u8,
}

impl ClockTime {
  /// Hour of the day, `0..=23`.
  pub fn hour(&self) -> u8 {
    self.hour
  }

  /// Minute of the hour, `0..=59`.
  pub fn minute(&self) -> u8 {
    self.minute
  }

  /// E.g. `14:30` is `870`.
  pub fn minutes_since_midnight(&self) -> u32 {
    self.hour as u32 * 60 + self.minute as u32
  }
}

impl TryFrom<i32> for ClockTime {
  type Error = Error;

  fn try_from(value: i32) -> Result<Self, Self::Error> {
    if !(0..=2359).contains(&value) || value % 100 >= 60 {
      return Err(Error::InvalidClockTime(value));
    }
    Ok(ClockTime {
      hour: (value / 100) as u8,
      minute: (value % 100) as u8,
    })
  }
}

impl fmt::Display for ClockTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}", self.hour, self.minute)
  }
}
