//! View state for browsing the calendar.
//!
//! A [`Navigator`] owns the active view along with the month and week cursors. It never touches
//! the page itself: transitions that need a day's content hand back a [`DayRequest`] naming the
//! page to fetch and the history entry to record.

use crate::Calendar;
use crate::DayId;
use crate::MonthDay;
use crate::TOTAL_DAYS;
use crate::utils;

/// The number of 7-day blocks in the year; the last one is a single day.
const WEEKS: i32 = (TOTAL_DAYS as i32 + 6) / 7;

/// Which panel of the calendar is showing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum View {
  /// The whole year as a grid of day links.
  Year,
  /// A single month, by number.
  Month(u8),
  /// The 7-day block starting at the given day index.
  Week(i32),
  /// A single day's page.
  Day(DayId),
}

/// A navigation key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
  Left,
  Right,
  Escape,
}

/// A day page the UI layer should load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayRequest {
  pub day: DayId,
  /// Whether the transition should add a history entry. False when restoring from history.
  pub push_history: bool,
}

/// A history change the UI layer should make after a transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition {
  /// Fetch and show a day page.
  Load(DayRequest),
  /// The year view is showing; drop the URL fragment.
  ClearFragment,
}

impl DayRequest {
  /// The relative path of the page to fetch.
  pub fn path(&self) -> String {
    self.day.fetch_path()
  }

  /// The URL fragment to record.
  pub fn fragment(&self) -> String {
    self.day.fragment()
  }
}

/// The session's view state.
#[derive(Clone, Debug)]
pub struct Navigator {
  calendar: Calendar,
  view: View,
  month: u8,
  week_start: i32,
}

impl Navigator {
  /// A navigator showing the year view, with both cursors at the start of the year.
  pub const fn new(calendar: Calendar) -> Self {
    Self { calendar, view: View::Year, month: 1, week_start: 0 }
  }

  #[inline]
  pub const fn calendar(&self) -> &Calendar {
    &self.calendar
  }

  #[inline]
  pub const fn view(&self) -> View {
    self.view
  }

  /// The month cursor, in `1..=12`.
  #[inline]
  pub const fn current_month(&self) -> u8 {
    self.month
  }

  /// The week cursor: a multiple of 7 in `[0, TOTAL_DAYS)`.
  #[inline]
  pub const fn week_start(&self) -> i32 {
    self.week_start
  }

  /// Return to the year view.
  pub fn show_year(&mut self) -> Transition {
    #[cfg(feature = "log")]
    log::debug!("showing year view");
    self.view = View::Year;
    Transition::ClearFragment
  }

  /// Show the given month. Returns false, leaving the state alone, if it is out of range.
  pub fn show_month(&mut self, month: u8) -> bool {
    if utils::month(month.into()).is_none() {
      #[cfg(feature = "log")]
      log::trace!(month = month; "rejected month");
      return false;
    }
    self.month = month;
    self.view = View::Month(month);
    #[cfg(feature = "log")]
    log::debug!(month = month; "showing month view");
    true
  }

  /// Move the month cursor by `delta` months, wrapping within the year, and show that month.
  pub fn step_month(&mut self, delta: i32) {
    let month = (self.month as i32 - 1 + delta % 12).rem_euclid(12) as u8 + 1;
    self.show_month(month);
  }

  /// Show the 7-day block containing `index` (folded into the year first).
  pub fn show_week(&mut self, index: i32) {
    let index = utils::normalize(index as i64) as i32;
    self.week_start = self.calendar.week_start_index(index) as i32;
    self.view = View::Week(self.week_start);
    #[cfg(feature = "log")]
    log::debug!(week_start = self.week_start; "showing week view");
  }

  /// Move the week cursor by `delta` blocks, wrapping within the year.
  ///
  /// Stepping back from the first block reaches the final, single-day block.
  pub fn step_week(&mut self, delta: i32) {
    let week = (self.week_start / 7 + delta % WEEKS).rem_euclid(WEEKS);
    self.show_week(week * 7);
  }

  /// Open the day with the given identifier.
  ///
  /// Returns `None`, leaving the state alone, if the identifier does not parse for this
  /// calendar's year or names a month outside the table.
  pub fn select(&mut self, id: &str) -> Option<DayRequest> {
    let month_day = self.calendar.parse_day_id(id)?;
    self.open(month_day, true)
  }

  /// Open the day named by a display label, such as `"March 15, 2025"` for `"%B %-d, %Y"`.
  ///
  /// Returns `None`, leaving the state alone, if the label does not parse for this calendar's
  /// year.
  pub fn select_label(&mut self, label: &str, format_str: &'static str) -> Option<DayRequest> {
    let month_day = self.calendar.parse_label(label, format_str)?;
    self.open(month_day, true)
  }

  /// Move the open day by `delta` days, wrapping within the year.
  ///
  /// Does nothing outside the day view.
  pub fn step_day(&mut self, delta: i32) -> Option<DayRequest> {
    let View::Day(day) = self.view else {
      return None;
    };
    let next = self.calendar.shift(day, delta)?;
    self.open(next.month_day(), true)
  }

  /// Restore the view from a URL fragment after a history change.
  ///
  /// An empty or unparsable fragment shows the year view.
  pub fn restore(&mut self, fragment: &str) -> Option<DayRequest> {
    let request = self.calendar.parse_fragment(fragment).and_then(|md| self.open(md, false));
    if request.is_none() {
      self.show_year();
    }
    request
  }

  /// React to a key press in the current view.
  ///
  /// Returns `None` when the key was ignored or only moved a month or week cursor.
  pub fn handle_key(&mut self, key: Key) -> Option<Transition> {
    match (self.view, key) {
      (View::Day(_), Key::Left) => self.step_day(-1).map(Transition::Load),
      (View::Day(_), Key::Right) => self.step_day(1).map(Transition::Load),
      (View::Day(_), Key::Escape) => Some(self.show_year()),
      (View::Month(_), Key::Left) => {
        self.step_month(-1);
        None
      },
      (View::Month(_), Key::Right) => {
        self.step_month(1);
        None
      },
      (View::Week(_), Key::Left) => {
        self.step_week(-1);
        None
      },
      (View::Week(_), Key::Right) => {
        self.step_week(1);
        None
      },
      _ => None,
    }
  }

  fn open(&mut self, month_day: MonthDay, push_history: bool) -> Option<DayRequest> {
    let MonthDay { month, day } = month_day;
    let index = self.calendar.day_index(month, day)?;
    let id = self.calendar.day_id(month, day);
    self.view = View::Day(id);
    // `day_index` only succeeds for months in the table.
    self.month = month as u8;
    self.week_start =
      self.calendar.week_start_index(utils::normalize(index as i64) as i32) as i32;
    #[cfg(feature = "log")]
    log::debug!(day:% = id, index = index, push_history = push_history; "showing day view");
    Some(DayRequest { day: id, push_history })
  }
}

impl Default for Navigator {
  fn default() -> Self {
    Self::new(Calendar::default())
  }
}
