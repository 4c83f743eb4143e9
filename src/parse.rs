use std::fmt;
use std::str::FromStr;

use crate::DayId;

/// Parses `YYYY-MM-DD`.
///
/// Components only have to be numeric; widths and ranges are not checked, so `2025-2-30` parses.
impl FromStr for DayId {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    macro_rules! fail {
      ($s:ident, $r:literal) => {
        ParseError { src: $s.into(), reason: Some($r) }
      };
    }
    let pieces: Vec<&str> = s.split('-').collect();
    if pieces.len() != 3 {
      return Err(fail!(s, "Expected three components in day identifier."));
    }
    let year = pieces[0].parse::<i16>().map_err(|_| fail!(s, "Failed to parse year"))?;
    let month = pieces[1].parse::<u16>().map_err(|_| fail!(s, "Failed to parse month"))?;
    let day = pieces[2].parse::<u16>().map_err(|_| fail!(s, "Failed to parse day"))?;
    Ok(DayId::new(year, month, day))
  }
}

/// The error returned when a string is not a day identifier.
#[derive(Debug)]
pub struct ParseError {
  src: String,
  reason: Option<&'static str>,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Parse error attempting to parse DayId from {}{}",
      self.src,
      self.reason.map(|r| format!(": {}", r)).unwrap_or_default(),
    )
  }
}
