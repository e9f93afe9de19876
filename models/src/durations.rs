use crate::ModelError;
use crate::wire::LIST_SEPARATOR;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Seconds spent up, down and paused, from the `"up-down-paused"` wire string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UptimeDurations {
    pub up: u64,
    pub down: u64,
    pub paused: u64,
}

impl UptimeDurations {
    /// Sum of all three, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.up.saturating_add(self.down).saturating_add(self.paused)
    }
}

impl FromStr for UptimeDurations {
    type Err = ModelError;

    #[track_caller]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .trim()
            .split(LIST_SEPARATOR)
            .map(|part| part.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                ModelError::validation(format!("Invalid duration triplet '{raw}': {e}"))
            })?;

        match parts.as_slice() {
            [up, down, paused] => Ok(Self {
                up: *up,
                down: *down,
                paused: *paused,
            }),
            _ => Err(ModelError::validation(format!(
                "Duration triplet '{raw}' must have 3 parts, found {}",
                parts.len()
            ))),
        }
    }
}

impl fmt::Display for UptimeDurations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{LIST_SEPARATOR}{}{LIST_SEPARATOR}{}",
            self.up, self.down, self.paused
        )
    }
}

impl Serialize for UptimeDurations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
