//! Billing periods are six-character `YYYYMM` codes naming the invoice cycle a bill applies to.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A well-formed `YYYYMM` code with a month in `01..=12`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check a raw code against `^\d{4}(0[1-9]|1[0-2])$`
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedBillingPeriod(raw.to_string());

        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let year = raw[..4].parse::<i32>().map_err(|_| malformed())?;
        let month = raw[4..].parse::<u32>().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }

        Ok(Self { year, month })
    }
}

impl FromStr for BillingPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// Which years a form accepts in its billing period field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPolicy {
    AnyYear,
    FixedYear(i32),
}

impl PeriodPolicy {
    /// Parse and apply the year restriction
    pub fn check(&self, raw: &str) -> Result<BillingPeriod, ValidationError> {
        let period = BillingPeriod::parse(raw.trim()).map_err(|err| match self {
            PeriodPolicy::FixedYear(year) => ValidationError::BillingPeriodWrongYear(*year),
            PeriodPolicy::AnyYear => err,
        })?;

        match self {
            PeriodPolicy::FixedYear(year) if period.year != *year => {
                Err(ValidationError::BillingPeriodWrongYear(*year))
            }
            _ => Ok(period),
        }
    }

    /// HTML `pattern` attribute matching what `check` accepts
    pub fn html_pattern(&self) -> String {
        match self {
            PeriodPolicy::AnyYear => r"\d{4}(0[1-9]|1[0-2])".to_string(),
            PeriodPolicy::FixedYear(year) => format!("{:04}(0[1-9]|1[0-2])", year),
        }
    }

    pub fn placeholder(&self) -> String {
        match self {
            PeriodPolicy::AnyYear => "YYYYMM".to_string(),
            PeriodPolicy::FixedYear(year) => format!("{:04}MM", year),
        }
    }
}
