//! The `daybook` crate provides the date arithmetic behind a single-year journal calendar: a year
//! rendered as a grid of day links, where each day is a static page named after its identifier.
//!
//! Every date lives in one configured year of a fixed 365-day calendar (there are no leap days).
//! A day is exchanged with the outside world only as a `YYYY-MM-DD` [`DayId`], and is located
//! within the year by its zero-based day index.
//!
//! ## Examples
//!
//! Converting between identifiers and indices:
//!
//! ```
//! use daybook::Calendar;
//!
//! let calendar = Calendar::new(2025);
//! assert_eq!(calendar.day_index(3, 15), Some(73));
//! assert_eq!(calendar.index_to_day_id(73).to_string(), "2025-03-15");
//! ```
//!
//! Navigating, with wraparound at the end of the year:
//!
//! ```
//! # use daybook::Calendar;
//! let calendar = Calendar::new(2025);
//! let next = calendar.shift_day_id("2025-12-31", 1).unwrap();
//! assert_eq!(next.to_string(), "2025-01-01");
//! assert_eq!(next.fetch_path(), "./2025-01-01.html");
//! ```

use std::fmt;

use strptime::ParseResult;
use strptime::Parser;

/// Construct a day identifier from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use daybook::day;
/// let d = day! { 2025-03-15 };
/// assert_eq!(d.year(), 2025);
/// assert_eq!(d.month(), 3);
/// assert_eq!(d.day(), 15);
/// ```
#[macro_export]
macro_rules! day {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::DayId::new($y, $m, $d)
    }
  }};
}

mod format;
pub mod iter;
pub mod lightbox;
pub mod nav;
mod parse;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use iter::DayIterator;
pub use lightbox::Lightbox;
pub use nav::DayRequest;
pub use nav::Key;
pub use nav::Navigator;
pub use nav::Transition;
pub use nav::View;
pub use parse::ParseError;
pub use utils::MONTHS;
pub use utils::Month;
pub use utils::TOTAL_DAYS;

/// The year used by [`Calendar::default`].
pub const DEFAULT_YEAR: i16 = 2025;

/// The canonical `YYYY-MM-DD` identifier of a single day.
///
/// A `DayId` is deliberately permissive: it stores whatever month and day it is given, so
/// "February 30" is representable and prints as `2025-02-30`. Use [`DayId::index`] to place it
/// within the year.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct DayId {
  year: i16,
  month: u16,
  day: u16,
}

impl DayId {
  /// Construct a new `DayId` from the provided year, month, and day.
  ///
  /// No range checks are performed.
  ///
  /// ## Examples
  ///
  /// ```
  /// use daybook::DayId;
  /// let id = DayId::new(2025, 4, 21);
  /// assert_eq!(id.to_string(), "2025-04-21");
  /// ```
  pub const fn new(year: i16, month: u16, day: u16) -> Self {
    Self { year, month, day }
  }

  /// Parse a day from a display label, according to the provided format string.
  ///
  /// The format must include a year.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use daybook::day;
  /// use daybook::DayId;
  /// let id = DayId::parse("March 15, 2025", "%B %-d, %Y").unwrap();
  /// assert_eq!(id, day! { 2025-03-15 });
  /// ```
  pub fn parse(label: impl AsRef<str>, format_str: &'static str) -> ParseResult<DayId> {
    let parser = Parser::new(format_str);
    let raw_date = parser.parse(label)?.date()?;
    Ok(Self::new(raw_date.year(), raw_date.month() as u16, raw_date.day() as u16))
  }
}

impl DayId {
  /// The year component.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.year
  }

  /// The month component, starting from 1.
  #[inline]
  pub const fn month(&self) -> u16 {
    self.month
  }

  /// The day of the month, starting from 1.
  #[inline]
  pub const fn day(&self) -> u16 {
    self.day
  }

  /// The month and day, without the year.
  #[inline]
  pub const fn month_day(&self) -> MonthDay {
    MonthDay { month: self.month, day: self.day }
  }

  /// The zero-based day index, or `None` if the month is not in `1..=12`.
  ///
  /// The day is not checked against the month's length.
  #[inline]
  pub const fn index(&self) -> Option<i32> {
    utils::day_index(self.month, self.day)
  }

  /// The relative path of the static page for this day.
  pub fn fetch_path(&self) -> String {
    format!("./{self}.html")
  }

  /// The URL fragment (including `#`) that addresses this day.
  pub fn fragment(&self) -> String {
    format!("#{self}")
  }

  /// Format the day according to the provided `strftime`-style specifier.
  ///
  /// Supported: `%Y %C %y %m %d %e %B %b %h %j %F %t %n %%`, with the `-`, `0` and `_` padding
  /// modifiers.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use daybook::day;
  /// assert_eq!(day! { 2025-03-05 }.format("%B %-d").to_string(), "March 5");
  /// ```
  pub fn format<'a>(&'a self, format_str: &'a str) -> format::FormattedDay<'a> {
    format::FormattedDay { day: *self, format: format_str }
  }
}

impl fmt::Debug for DayId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%F"))
  }
}

impl fmt::Display for DayId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%F"))
  }
}

/// A month and day-of-month pair, with no year attached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MonthDay {
  pub month: u16,
  pub day: u16,
}

/// The arithmetic of one fixed 365-day year.
///
/// All identifiers produced by a `Calendar` carry its year, and identifiers for any other year
/// are rejected when parsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Calendar {
  year: i16,
}

impl Calendar {
  /// A calendar for the given year.
  pub const fn new(year: i16) -> Self {
    Self { year }
  }

  /// The configured year.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.year
  }

  /// The identifier for the given month and day of this calendar's year.
  ///
  /// Out-of-range values yield a well-formed but meaningless identifier.
  ///
  /// ## Examples
  ///
  /// ```
  /// use daybook::Calendar;
  /// let calendar = Calendar::new(2025);
  /// assert_eq!(calendar.day_id(3, 5).to_string(), "2025-03-05");
  /// assert_eq!(calendar.day_id(2, 30).to_string(), "2025-02-30");
  /// ```
  pub const fn day_id(&self, month: u16, day: u16) -> DayId {
    DayId::new(self.year, month, day)
  }

  /// Parse an identifier into its month and day.
  ///
  /// Returns `None` if the identifier does not consist of three numeric components separated by
  /// `-`, or if its year is not this calendar's year. Month and day ranges are not checked.
  ///
  /// ## Examples
  ///
  /// ```
  /// use daybook::Calendar;
  /// use daybook::MonthDay;
  /// let calendar = Calendar::new(2025);
  /// assert_eq!(calendar.parse_day_id("2025-03-15"), Some(MonthDay { month: 3, day: 15 }));
  /// assert_eq!(calendar.parse_day_id("2024-03-15"), None);
  /// assert_eq!(calendar.parse_day_id("2025-March-15"), None);
  /// ```
  pub fn parse_day_id(&self, id: &str) -> Option<MonthDay> {
    let id: DayId = id.parse().ok()?;
    (id.year == self.year).then(|| id.month_day())
  }

  /// Parse a display label, such as one rendered by [`DayId::format`], into a month and day.
  ///
  /// Returns `None` if the label does not match the format or names another year.
  ///
  /// ## Examples
  ///
  /// ```
  /// use daybook::Calendar;
  /// use daybook::MonthDay;
  /// let calendar = Calendar::new(2025);
  /// let parsed = calendar.parse_label("March 15, 2025", "%B %-d, %Y");
  /// assert_eq!(parsed, Some(MonthDay { month: 3, day: 15 }));
  /// ```
  pub fn parse_label(&self, label: &str, format_str: &'static str) -> Option<MonthDay> {
    let id = DayId::parse(label, format_str).ok()?;
    (id.year == self.year).then(|| id.month_day())
  }

  /// Parse a URL fragment or page path into a month and day.
  ///
  /// Accepts a bare identifier as well as the path forms stored in browser history, such as
  /// `#./2025-03-15.html` or `#/journal/2025-03-15.html`.
  pub fn parse_fragment(&self, fragment: &str) -> Option<MonthDay> {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let name = path.rsplit('/').next().unwrap_or(path);
    self.parse_day_id(name.strip_suffix(".html").unwrap_or(name))
  }

  /// The zero-based day index of the given month and day.
  ///
  /// Returns `None` if the month is not in `1..=12`. The day is not bounded by the month's
  /// length, so February 30 lands on a March index.
  #[inline]
  pub const fn day_index(&self, month: u16, day: u16) -> Option<i32> {
    utils::day_index(month, day)
  }

  /// The identifier for the given day index.
  ///
  /// Any integer is accepted; it is first folded into `[0, TOTAL_DAYS)`.
  pub fn index_to_day_id(&self, index: i32) -> DayId {
    utils::day_at(self.year, utils::normalize(index as i64))
  }

  /// Move a day by `delta` days, wrapping within the year.
  ///
  /// Returns `None` if the day belongs to another year or its month is out of range.
  pub fn shift(&self, day: DayId, delta: i32) -> Option<DayId> {
    if day.year != self.year {
      return None;
    }
    let index = day.index()?;
    Some(utils::day_at(self.year, utils::normalize(index as i64 + delta as i64)))
  }

  /// Parse an identifier and move it by `delta` days, wrapping within the year.
  ///
  /// ## Examples
  ///
  /// ```
  /// use daybook::Calendar;
  /// let calendar = Calendar::new(2025);
  /// let shifted = calendar.shift_day_id("2025-03-15", 7).map(|d| d.to_string());
  /// assert_eq!(shifted.as_deref(), Some("2025-03-22"));
  /// ```
  pub fn shift_day_id(&self, id: &str, delta: i32) -> Option<DayId> {
    let MonthDay { month, day } = self.parse_day_id(id)?;
    self.shift(self.day_id(month, day), delta)
  }

  /// The first index of the 7-day block containing `index`.
  ///
  /// Blocks are counted from index 0 and do not correspond to weekdays. The result is widened
  /// because the block containing `i32::MIN` starts below it.
  #[inline]
  pub const fn week_start_index(&self, index: i32) -> i64 {
    (index as i64).div_euclid(7) * 7
  }

  /// Iterate over the days of the given month, or `None` if the month is out of range.
  pub fn month_days(&self, month: u16) -> Option<DayIterator> {
    let days = utils::month(month)?.days;
    let start = utils::MONTH_STARTS[month as usize - 1];
    Some(DayIterator::new(self.year, start, start + days))
  }

  /// Iterate over the 7-day block containing `index` (folded into the year first).
  ///
  /// The final block of the year holds only one day.
  pub fn week_days(&self, index: i32) -> DayIterator {
    let start = self.week_start_index(utils::normalize(index as i64) as i32) as u16;
    DayIterator::new(self.year, start, (start + 7).min(TOTAL_DAYS))
  }
}

impl Default for Calendar {
  fn default() -> Self {
    Self::new(DEFAULT_YEAR)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  const CAL: Calendar = Calendar::new(2025);

  #[test]
  fn test_index_round_trip() {
    for index in 0..TOTAL_DAYS as i32 {
      let id = CAL.index_to_day_id(index).to_string();
      let MonthDay { month, day } = CAL.parse_day_id(&id).unwrap();
      check!(CAL.day_index(month, day) == Some(index), "Incorrect on: {}", id);
    }
  }

  #[test]
  fn test_month_day_readback() {
    for m in MONTHS {
      for day in 1..=m.days {
        let id = CAL.day_id(m.number, day).to_string();
        check!(CAL.parse_day_id(&id) == Some(MonthDay { month: m.number, day }));
      }
    }
  }

  #[test]
  fn test_day_id() {
    check!(CAL.day_id(1, 1).to_string() == "2025-01-01");
    check!(CAL.day_id(12, 31).to_string() == "2025-12-31");
    check!(CAL.day_id(13, 40).to_string() == "2025-13-40");
    check!(CAL.day_id(0, 0).to_string() == "2025-00-00");
    check!(CAL.day_id(1, 100).to_string() == "2025-01-100");
    check!(format!("{:?}", CAL.day_id(4, 21)) == "2025-04-21");
  }

  #[test]
  fn test_parse_day_id() {
    check!(CAL.parse_day_id("2025-01-01") == Some(MonthDay { month: 1, day: 1 }));
    check!(CAL.parse_day_id("2025-2-30") == Some(MonthDay { month: 2, day: 30 }));
    check!(CAL.parse_day_id("2025-13-01") == Some(MonthDay { month: 13, day: 1 }));
    check!(CAL.parse_day_id("2024-01-01").is_none());
    check!(CAL.parse_day_id("2025-xx-01").is_none());
    check!(CAL.parse_day_id("2025-01").is_none());
    check!(CAL.parse_day_id("2025-01-01-01").is_none());
    check!(CAL.parse_day_id("").is_none());
    check!(Calendar::new(2024).parse_day_id("2024-01-01").is_some());

    // Components are any number up to `u16::MAX`, whatever the month or day range.
    check!(CAL.parse_day_id("2025-01-300") == Some(MonthDay { month: 1, day: 300 }));
    check!(CAL.parse_day_id("2025-400-01") == Some(MonthDay { month: 400, day: 1 }));
    check!(CAL.parse_day_id("2025-01-65535") == Some(MonthDay { month: 1, day: 65535 }));
    check!(CAL.parse_day_id("2025-01-65536").is_none());
  }

  #[test]
  fn test_parse_fragment() {
    let expected = Some(MonthDay { month: 3, day: 15 });
    check!(CAL.parse_fragment("#2025-03-15") == expected);
    check!(CAL.parse_fragment("2025-03-15") == expected);
    check!(CAL.parse_fragment("#./2025-03-15.html") == expected);
    check!(CAL.parse_fragment("#/journal/2025-03-15.html") == expected);
    check!(CAL.parse_fragment("#").is_none());
    check!(CAL.parse_fragment("#/journal/").is_none());
  }

  #[test]
  fn test_day_index() {
    check!(CAL.day_index(1, 1) == Some(0));
    check!(CAL.day_index(2, 1) == Some(31));
    check!(CAL.day_index(3, 1) == Some(59));
    check!(CAL.day_index(12, 31) == Some(364));
    check!(CAL.day_index(0, 1).is_none());
    check!(CAL.day_index(13, 1).is_none());

    // Overlong days run into the next month.
    check!(CAL.day_index(2, 30) == CAL.day_index(3, 2));
    check!(CAL.day_index(2, 40) == Some(70));
    check!(CAL.day_index(1, 300) == Some(299));
    check!(CAL.day_index(12, u16::MAX) == Some(334 + 65534));
  }

  #[test]
  fn test_index_to_day_id() {
    check!(CAL.index_to_day_id(0) == day! { 2025-01-01 });
    check!(CAL.index_to_day_id(31) == day! { 2025-02-01 });
    check!(CAL.index_to_day_id(364) == day! { 2025-12-31 });
    check!(CAL.index_to_day_id(-1) == day! { 2025-12-31 });
    check!(CAL.index_to_day_id(365) == day! { 2025-01-01 });
    check!(CAL.index_to_day_id(-365 * 3 + 73) == day! { 2025-03-15 });
    check!(CAL.index_to_day_id(i32::MIN).year() == 2025);
  }

  #[test]
  fn test_shift_day_id() {
    macro_rules! shifts_to {
      ($from:literal + $delta:literal == $to:literal) => {
        check!(CAL.shift_day_id($from, $delta).map(|d| d.to_string()).as_deref() == Some($to));
      };
    }
    shifts_to! { "2025-12-31" + 1 == "2025-01-01" };
    shifts_to! { "2025-01-01" + -1 == "2025-12-31" };
    shifts_to! { "2025-03-15" + 7 == "2025-03-22" };
    shifts_to! { "2025-03-15" + -7 == "2025-03-08" };
    shifts_to! { "2025-02-28" + 1 == "2025-03-01" };
    shifts_to! { "2025-03-01" + -1 == "2025-02-28" };
    shifts_to! { "2025-06-15" + 365 == "2025-06-15" };
    shifts_to! { "2025-02-30" + 0 == "2025-03-02" };
    shifts_to! { "2025-01-01" + 2147483647 == "2025-11-04" };
    shifts_to! { "2025-01-300" + 0 == "2025-10-27" };
    let farthest = CAL.shift_day_id("2025-12-65535", i32::MIN).map(|d| d.to_string());
    check!(farthest.as_deref() == Some("2025-08-14"));
    check!(CAL.shift_day_id("2024-01-01", 1).is_none());
    check!(CAL.shift_day_id("2025-13-01", 1).is_none());
    check!(CAL.shift_day_id("garbage", 1).is_none());
    check!(CAL.shift(day! { 2024-01-01 }, 1).is_none());
  }

  #[test]
  fn test_week_start_index() {
    let index = CAL.day_index(3, 15).unwrap();
    let start = CAL.week_start_index(index);
    check!(start % 7 == 0);
    check!(start <= i64::from(index));
    check!(i64::from(index) - start < 7);
    for i in -14..TOTAL_DAYS as i32 {
      check!(CAL.week_start_index(CAL.week_start_index(i) as i32) == CAL.week_start_index(i));
    }
    check!(CAL.week_start_index(-1) == -7);
    check!(CAL.week_start_index(364) == 364);
  }

  #[test]
  fn test_week_start_index_extremes() {
    check!(CAL.week_start_index(i32::MIN) == i64::from(i32::MIN) - 5);
    check!(CAL.week_start_index(i32::MIN + 1) == i64::from(i32::MIN) - 5);
    check!(CAL.week_start_index(i32::MAX) == i64::from(i32::MAX) - 1);
  }

  #[test]
  fn test_month_days() {
    let feb: Vec<DayId> = CAL.month_days(2).unwrap().collect();
    check!(feb.len() == 28);
    check!(feb.first() == Some(&day! { 2025-02-01 }));
    check!(feb.last() == Some(&day! { 2025-02-28 }));
    check!(CAL.month_days(12).unwrap().count() == 31);
    check!(CAL.month_days(0).is_none());
    check!(CAL.month_days(13).is_none());
  }

  #[test]
  fn test_week_days() {
    let week: Vec<DayId> = CAL.week_days(30).collect();
    check!(week.len() == 7);
    check!(week[0] == day! { 2025-01-29 });
    check!(week[6] == day! { 2025-02-04 });
    check!(CAL.week_days(364).collect::<Vec<_>>() == vec![day! { 2025-12-31 }]);
    check!(CAL.week_days(-1).collect::<Vec<_>>() == vec![day! { 2025-12-31 }]);
  }

  #[test]
  fn test_paths() {
    let id = day! { 2025-03-15 };
    check!(id.fetch_path() == "./2025-03-15.html");
    check!(id.fragment() == "#2025-03-15");
  }

  #[test]
  fn test_parse_label() -> ParseResult<()> {
    check!(DayId::parse("03/15/25", "%m/%d/%y")? == day! { 2025-03-15 });
    check!(DayId::parse("March 15, 2025", "%B %-d, %Y")? == day! { 2025-03-15 });
    Ok(())
  }

  #[test]
  fn test_label_round_trip() {
    for index in 0..TOTAL_DAYS as i32 {
      let id = CAL.index_to_day_id(index);
      let label = id.format("%B %-d, %Y").to_string();
      let parsed = CAL.parse_label(&label, "%B %-d, %Y");
      check!(parsed == Some(id.month_day()), "Incorrect on: {}", label);
    }
    check!(CAL.parse_label("March 15, 2024", "%B %-d, %Y").is_none());
    check!(CAL.parse_label("Smarch 15, 2025", "%B %-d, %Y").is_none());
  }

  #[test]
  fn test_default() {
    check!(Calendar::default().year() == DEFAULT_YEAR);
  }
}
