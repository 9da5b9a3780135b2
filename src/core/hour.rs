use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::prelude::*;

/// Two-digit hour label, `00` through `23`.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    derive_more::Display,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[display("{_0:02}")]
pub struct Hour(u8);

impl Hour {
    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(Self(hour)) } else { None }
    }

    /// All hours of a day, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..24).map(Self)
    }

    /// The next hour, wrapping `23` back to `00`.
    #[must_use]
    pub const fn succ(self) -> Self {
        Self((self.0 + 1) % 24)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for Hour {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        ensure!(label.len() == 2, "`{label}` is not a two-digit hour label");
        let hour: u8 = label.parse().with_context(|| format!("`{label}` is not a valid hour"))?;
        Self::new(hour).with_context(|| format!("hour `{label}` is out of range"))
    }
}
