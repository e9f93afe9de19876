use crate::ModelError;
use crate::wire::RANGE_SEPARATOR;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// An inclusive time window, encoded as `start_end` Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    #[track_caller]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::validation(format!(
                "Range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn wire_value(&self) -> String {
        format!(
            "{}{RANGE_SEPARATOR}{}",
            self.start.timestamp(),
            self.end.timestamp()
        )
    }
}

/// When a maintenance window starts.
///
/// One-off windows start at an absolute instant; recurring windows start at
/// an `HH:mm` time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTime {
    Epoch(DateTime<Utc>),
    TimeOfDay(String),
}

impl StartTime {
    #[track_caller]
    pub fn time_of_day(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::validation(format!(
                "Invalid time of day {hour}:{minute}"
            )));
        }
        Ok(StartTime::TimeOfDay(format!("{hour:02}:{minute:02}")))
    }

    pub fn is_epoch(&self) -> bool {
        matches!(self, StartTime::Epoch(_))
    }

    pub fn wire_value(&self) -> String {
        match self {
            StartTime::Epoch(instant) => instant.timestamp().to_string(),
            StartTime::TimeOfDay(time) => time.clone(),
        }
    }
}

impl From<DateTime<Utc>> for StartTime {
    fn from(instant: DateTime<Utc>) -> Self {
        StartTime::Epoch(instant)
    }
}

impl Serialize for StartTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StartTime::Epoch(instant) => serializer.serialize_i64(instant.timestamp()),
            StartTime::TimeOfDay(time) => serializer.serialize_str(time),
        }
    }
}
