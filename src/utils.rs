use crate::DayId;

/// A single entry of the month descriptor table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Month {
  /// The month number, starting from 1.
  pub number: u16,
  /// The English name of the month.
  pub name: &'static str,
  /// The three-letter abbreviation of the month.
  pub abbv: &'static str,
  /// The number of days in the month. February always has 28.
  pub days: u16,
}

macro_rules! months {
  ($($num:literal => $short:ident ~ $long:ident : $days:literal)*) => {
    /// The twelve months of the calendar year, in order.
    pub const MONTHS: [Month; 12] = [
      $(Month { number: $num, name: stringify!($long), abbv: stringify!($short), days: $days },)*
    ];
  }
}
months! {
   1 => Jan ~ January   : 31
   2 => Feb ~ February  : 28
   3 => Mar ~ March     : 31
   4 => Apr ~ April     : 30
   5 => May ~ May       : 31
   6 => Jun ~ June      : 30
   7 => Jul ~ July      : 31
   8 => Aug ~ August    : 31
   9 => Sep ~ September : 30
  10 => Oct ~ October   : 31
  11 => Nov ~ November  : 30
  12 => Dec ~ December  : 31
}

/// The number of days in the (always non-leap) year.
pub const TOTAL_DAYS: u16 = {
  let mut total = 0;
  let mut i = 0;
  while i < MONTHS.len() {
    total += MONTHS[i].days;
    i += 1;
  }
  total
};

const _: () = assert!(TOTAL_DAYS == 365, "Month table must sum to a 365-day year");

/// The day index of the first day of each month, indexed from 0 (not 1).
pub(crate) const MONTH_STARTS: [u16; 12] = {
  let mut starts = [0; 12];
  let mut i = 1;
  while i < starts.len() {
    starts[i] = starts[i - 1] + MONTHS[i - 1].days;
    i += 1;
  }
  starts
};

/// Look up the descriptor for a month number, if it is in the table.
pub(crate) const fn month(month: u16) -> Option<&'static Month> {
  match month {
    1..=12 => Some(&MONTHS[month as usize - 1]),
    _ => None,
  }
}

/// The day index for the given month and day.
///
/// The day is not checked against the length of the month; overlong days run on into the
/// following month's range.
pub(crate) const fn day_index(month: u16, day: u16) -> Option<i32> {
  match month {
    1..=12 => Some(MONTH_STARTS[month as usize - 1] as i32 + day as i32 - 1),
    _ => None,
  }
}

/// Fold any index into `[0, TOTAL_DAYS)`.
pub(crate) const fn normalize(index: i64) -> u16 {
  index.rem_euclid(TOTAL_DAYS as i64) as u16
}

/// The day identifier at a normalized index within the given year.
pub(crate) fn day_at(year: i16, index: u16) -> DayId {
  // Half-open ranges: a month start belongs to that month, not the one before.
  let m = MONTH_STARTS.iter().rposition(|&start| start <= index).unwrap_or(0);
  DayId::new(year, m as u16 + 1, index - MONTH_STARTS[m] + 1)
}
