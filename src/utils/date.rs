//! Calendar date parsing for page and manifest dates.
//!
//! Two formats appear in content:
//!
//! - ISO `YYYY-MM-DD` (e.g. `2025-08-12`)
//! - compact `MM/DD/YY` (e.g. `08/09/25`, years are 20YY)
//!
//! Anything else is not an error: it simply has no timestamp, and sorting
//! treats it as zero.
//!
//! # Examples
//!
//! ```ignore
//! let date = PortfolioDate::parse("2025-08-12").unwrap();
//! assert!(date.timestamp() > 0);
//! assert_eq!(timestamp_or_zero("Aug 2025"), 0);
//! ```

use anyhow::{Result, bail};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A calendar day without time or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PortfolioDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PortfolioDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse `YYYY-MM-DD` or `MM/DD/YY`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let date = match bytes.len() {
            10 if bytes[4] == b'-' && bytes[7] == b'-' => Self::from_ymd(
                parse_u16(&bytes[0..4])?,
                parse_u8(&bytes[5..7])?,
                parse_u8(&bytes[8..10])?,
            ),
            8 if bytes[2] == b'/' && bytes[5] == b'/' => {
                let month = parse_u8(&bytes[0..2])?;
                let day = parse_u8(&bytes[3..5])?;
                let year = 2000 + u16::from(parse_u8(&bytes[6..8])?);
                Self::from_ymd(year, month, day)
            }
            _ => return None,
        };
        date.validate().ok()?;
        Some(date)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Days since 1970-01-01 (civil-from-days inverse).
    fn days_since_epoch(self) -> i64 {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let y = if m <= 2 { y - 1 } else { y };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Milliseconds since the Unix epoch at UTC midnight.
    pub fn timestamp(self) -> i64 {
        self.days_since_epoch() * MILLIS_PER_DAY
    }
}

/// Sortable timestamp for a content date, `None` for unrecognized input.
#[inline]
pub fn parse_timestamp(s: &str) -> Option<i64> {
    PortfolioDate::parse(s.trim()).map(PortfolioDate::timestamp)
}

/// Sortable timestamp for a content date, `0` for unrecognized input.
#[inline]
pub fn timestamp_or_zero(s: &str) -> i64 {
    parse_timestamp(s).unwrap_or(0)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
