//! Sampling frequency types.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Sampling frequency of a regular series.
///
/// Fixed-duration units step by an exact number of seconds. Calendar units
/// (months, quarters, years) step by calendar months; a grid anchored on the
/// last day of a month stays on month ends.
///
/// Serialized as its alias string (e.g. `"D"`, `"15min"`, `"M"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    Days(u32),
    Weeks(u32),
    Months(u32),
    Quarters(u32),
    Years(u32),
}

impl Frequency {
    /// Number of base units per step.
    pub fn multiplier(&self) -> u32 {
        match *self {
            Frequency::Seconds(n)
            | Frequency::Minutes(n)
            | Frequency::Hours(n)
            | Frequency::Days(n)
            | Frequency::Weeks(n)
            | Frequency::Months(n)
            | Frequency::Quarters(n)
            | Frequency::Years(n) => n,
        }
    }

    /// Step length in seconds for fixed-duration units.
    pub fn fixed_seconds(&self) -> Option<i64> {
        let n = i64::from(self.multiplier());
        match self {
            Frequency::Seconds(_) => Some(n),
            Frequency::Minutes(_) => Some(60 * n),
            Frequency::Hours(_) => Some(3_600 * n),
            Frequency::Days(_) => Some(86_400 * n),
            Frequency::Weeks(_) => Some(604_800 * n),
            Frequency::Months(_) | Frequency::Quarters(_) | Frequency::Years(_) => None,
        }
    }

    /// Step length in calendar months for calendar units.
    pub fn calendar_months(&self) -> Option<u32> {
        match *self {
            Frequency::Months(n) => Some(n),
            Frequency::Quarters(n) => Some(3 * n),
            Frequency::Years(n) => Some(12 * n),
            _ => None,
        }
    }

    /// Whether steps are calendar months rather than fixed durations.
    pub fn is_calendar(&self) -> bool {
        self.calendar_months().is_some()
    }

    /// Whether the frequency describes a non-empty step.
    pub fn is_valid(&self) -> bool {
        self.multiplier() > 0
    }

    /// Conventional seasonal period for this sampling frequency.
    ///
    /// Only defined for unit multipliers; yearly data has no canonical cycle.
    pub fn canonical_period(&self) -> Option<usize> {
        if self.multiplier() != 1 {
            return None;
        }
        match self {
            Frequency::Seconds(_) => Some(60),
            Frequency::Minutes(_) => Some(60),
            Frequency::Hours(_) => Some(24),
            Frequency::Days(_) => Some(7),
            Frequency::Weeks(_) => Some(52),
            Frequency::Months(_) => Some(12),
            Frequency::Quarters(_) => Some(4),
            Frequency::Years(_) => None,
        }
    }

    /// Timestamp `steps` grid points after `start`, keeping the start's day
    /// of month (clamped in short months) on calendar grids.
    pub fn advance(&self, start: NaiveDateTime, steps: usize) -> Option<NaiveDateTime> {
        self.advance_anchored(start, steps, MonthAnchor::DayOfMonth)
    }

    /// Timestamp `steps` grid points after `start` on a grid placed by `anchor`.
    ///
    /// `MonthAnchor::MonthEnd` only applies when `start` is itself a month end.
    pub fn advance_anchored(
        &self,
        start: NaiveDateTime,
        steps: usize,
        anchor: MonthAnchor,
    ) -> Option<NaiveDateTime> {
        if let Some(step) = self.fixed_seconds() {
            let secs = step.checked_mul(i64::try_from(steps).ok()?)?;
            return start.checked_add_signed(Duration::seconds(secs));
        }

        let months = u64::from(self.calendar_months()?).checked_mul(steps as u64)?;
        let shifted = start.checked_add_months(Months::new(u32::try_from(months).ok()?))?;
        if anchor == MonthAnchor::MonthEnd && is_month_end(start.date()) {
            let last = last_day_of_month(shifted.year(), shifted.month())?;
            shifted.date().with_day(last).map(|d| d.and_time(start.time()))
        } else {
            Some(shifted)
        }
    }

    /// Grid index of `t` on the day-of-month grid anchored at `start`.
    pub fn grid_index(&self, start: NaiveDateTime, t: NaiveDateTime) -> Option<usize> {
        self.grid_index_anchored(start, t, MonthAnchor::DayOfMonth)
    }

    /// Grid index of `t` on the grid anchored at `start`, if `t` lies on it.
    pub fn grid_index_anchored(
        &self,
        start: NaiveDateTime,
        t: NaiveDateTime,
        anchor: MonthAnchor,
    ) -> Option<usize> {
        if t < start || !self.is_valid() {
            return None;
        }

        let steps = if let Some(step) = self.fixed_seconds() {
            let secs = t.signed_duration_since(start).num_seconds();
            if secs % step != 0 {
                return None;
            }
            secs / step
        } else {
            let per_step = i64::from(self.calendar_months()?);
            let months = month_index(t) - month_index(start);
            if months % per_step != 0 {
                return None;
            }
            months / per_step
        };

        let steps = usize::try_from(steps).ok()?;
        (self.advance_anchored(start, steps, anchor)? == t).then_some(steps)
    }

    /// Short alias, e.g. `"D"`, `"15min"`, `"M"`.
    pub fn alias(&self) -> String {
        let unit = match self {
            Frequency::Seconds(_) => "S",
            Frequency::Minutes(_) => "min",
            Frequency::Hours(_) => "H",
            Frequency::Days(_) => "D",
            Frequency::Weeks(_) => "W",
            Frequency::Months(_) => "M",
            Frequency::Quarters(_) => "Q",
            Frequency::Years(_) => "A",
        };
        match self.multiplier() {
            1 => unit.to_string(),
            n => format!("{}{}", n, unit),
        }
    }
}

/// Placement of calendar grid points within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthAnchor {
    /// Keep the first timestamp's day of month, clamped in short months
    #[default]
    DayOfMonth,
    /// Follow the last day of every month
    MonthEnd,
}

impl MonthAnchor {
    /// Anchor that puts more of the sorted `timestamps` on the `frequency`
    /// grid starting at the first one.
    ///
    /// Month ends win only when they explain strictly more timestamps, so a
    /// series on the 28th or the 30th that starts on a month end keeps its
    /// day of month. Fixed-duration frequencies always use `DayOfMonth`.
    pub fn detect(frequency: Frequency, timestamps: &[NaiveDateTime]) -> Self {
        let Some(&start) = timestamps.first() else {
            return MonthAnchor::DayOfMonth;
        };
        if !frequency.is_calendar() || !is_month_end(start.date()) {
            return MonthAnchor::DayOfMonth;
        }
        let on_grid = |anchor: MonthAnchor| {
            timestamps
                .iter()
                .filter(|&&t| frequency.grid_index_anchored(start, t, anchor).is_some())
                .count()
        };
        if on_grid(MonthAnchor::MonthEnd) > on_grid(MonthAnchor::DayOfMonth) {
            MonthAnchor::MonthEnd
        } else {
            MonthAnchor::DayOfMonth
        }
    }
}

fn month_index(t: NaiveDateTime) -> i64 {
    i64::from(t.year()) * 12 + i64::from(t.month0())
}

fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}

impl FromStr for Frequency {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "secondly" => return Ok(Frequency::Seconds(1)),
            "minutely" => return Ok(Frequency::Minutes(1)),
            "hourly" => return Ok(Frequency::Hours(1)),
            "daily" => return Ok(Frequency::Days(1)),
            "weekly" => return Ok(Frequency::Weeks(1)),
            "monthly" => return Ok(Frequency::Months(1)),
            "quarterly" => return Ok(Frequency::Quarters(1)),
            "yearly" | "annual" | "annually" => return Ok(Frequency::Years(1)),
            _ => {}
        }

        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (count, unit) = trimmed.split_at(digits_end);
        let n: u32 = if count.is_empty() {
            1
        } else {
            count
                .parse()
                .map_err(|_| SeriesError::InvalidFrequency(s.to_string()))?
        };
        if n == 0 {
            return Err(SeriesError::InvalidFrequency(s.to_string()));
        }

        // Anchors such as "W-SUN" or "A-DEC" do not change the step
        let unit = unit.split('-').next().unwrap_or(unit);
        let frequency = match unit {
            "S" | "s" | "sec" => Frequency::Seconds(n),
            "T" | "min" => Frequency::Minutes(n),
            "H" | "h" => Frequency::Hours(n),
            "D" | "d" => Frequency::Days(n),
            "W" | "w" => Frequency::Weeks(n),
            "M" | "MS" | "ME" => Frequency::Months(n),
            "Q" | "QS" | "QE" => Frequency::Quarters(n),
            "A" | "AS" | "Y" | "YS" | "YE" => Frequency::Years(n),
            _ => return Err(SeriesError::InvalidFrequency(s.to_string())),
        };
        Ok(frequency)
    }
}

impl TryFrom<String> for Frequency {
    type Error = SeriesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.alias()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias())
    }
}
