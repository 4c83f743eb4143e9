use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fmt::Write;

use crate::DayId;
use crate::utils;

/// A day identifier with a requested label format.
pub struct FormattedDay<'a> {
  pub(crate) day: DayId,
  pub(crate) format: &'a str,
}

impl Debug for FormattedDay<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for FormattedDay<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let d = self.day;
    let month = utils::month(d.month());
    let mut flag = false;
    let mut padding = Padding::Default;
    for c in self.format.chars() {
      if flag {
        #[rustfmt::skip]
        match c {
          '0' => { padding = Padding::Zero; continue; },
          '-' => { padding = Padding::Suppress; continue; },
          '_' => { padding = Padding::Space; continue; },
          _ => {},
        };

        macro_rules! write_padded {
          ($f:ident, $pad:expr, $level:literal, $e:expr) => {
            match $pad {
              Padding::Default | Padding::Zero => write!($f, concat!("{:0", $level, "}"), $e),
              Padding::Space => write!($f, concat!("{:", $level, "}"), $e),
              Padding::Suppress => write!($f, "{}", $e),
            }
          };
        }

        flag = false;
        match c {
          'Y' => write_padded!(f, padding, 4, d.year())?,
          'C' => write_padded!(f, padding, 2, d.year() / 100)?,
          'y' => write_padded!(f, padding, 2, d.year().rem_euclid(100))?,
          'm' => write_padded!(f, padding, 2, d.month())?,
          'd' => write_padded!(f, padding, 2, d.day())?,
          'e' => write_padded!(f, padding.or_space(), 2, d.day())?,
          'B' => match month {
            Some(m) => f.write_str(m.name)?,
            None => write!(f, "{}", d.month())?,
          },
          'b' | 'h' => match month {
            Some(m) => f.write_str(m.abbv)?,
            None => write!(f, "{}", d.month())?,
          },
          'j' => match d.index() {
            Some(index) => write_padded!(f, padding, 3, index + 1)?,
            None => f.write_str("???")?,
          },
          'F' => write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day())?,
          't' => f.write_char('\t')?,
          'n' => f.write_char('\n')?,
          '%' => f.write_char('%')?,
          _ => Err(Error)?,
        }
      } else if c == '%' {
        flag = true;
        padding = Padding::Default;
      } else {
        f.write_char(c)?;
      }
    }
    Ok(())
  }
}

impl PartialEq<&str> for FormattedDay<'_> {
  fn eq(&self, other: &&str) -> bool {
    &self.to_string().as_str() == other
  }
}

/// A padding modifier
#[derive(Copy, Clone)]
enum Padding {
  /// Use the default padding (usually `0`).
  Default,
  /// Explicitly pad with `0`
  Zero,
  /// Explicitly pad with ` `.
  Space,
  /// Explicitly prevent padding, even if the token has default padding.
  Suppress,
}

impl Padding {
  /// Space padding unless a modifier was given.
  const fn or_space(self) -> Self {
    match self {
      Self::Default => Self::Space,
      other => other,
    }
  }
}
