//! Iterator over days

use std::iter::FusedIterator;
use std::iter::Iterator;

use crate::DayId;
use crate::utils;

/// An iterator over a contiguous range of day indices within one year.
pub struct DayIterator {
  year: i16,
  cursor: u16,
  end: u16,
}

impl DayIterator {
  pub(crate) const fn new(year: i16, start: u16, end: u16) -> Self {
    Self { year, cursor: start, end }
  }
}

impl Iterator for DayIterator {
  type Item = DayId;

  fn next(&mut self) -> Option<Self::Item> {
    match self.cursor >= self.end {
      true => None,
      false => {
        let answer = Some(utils::day_at(self.year, self.cursor));
        self.cursor += 1;
        answer
      },
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.end.saturating_sub(self.cursor) as usize;
    (len, Some(len))
  }
}

impl ExactSizeIterator for DayIterator {}

impl FusedIterator for DayIterator {}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_iter() {
    check!(DayIterator::new(2025, 0, 3).collect::<Vec<DayId>>().len() == 3);
    check!(DayIterator::new(2025, 5, 5).next().is_none());
    check!(DayIterator::new(2025, 6, 5).collect::<Vec<DayId>>().is_empty());
    check!(DayIterator::new(2025, 30, 33).nth(1) == Some(day! { 2025-02-01 }));
  }

  #[test]
  fn test_len() {
    let mut iter = DayIterator::new(2025, 0, 7);
    check!(iter.len() == 7);
    iter.next();
    check!(iter.len() == 6);
    check!(DayIterator::new(2025, 6, 5).len() == 0);
  }
}
