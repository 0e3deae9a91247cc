use std::{fmt, str::FromStr};

use crate::{Input, SearchError};

/// Inclusive range of symbol values that tables are indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: u8,
    last: u8,
}

impl Alphabet {
    /// Every byte value.
    pub const BYTES: Alphabet = Alphabet { first: 0, last: 255 };
    /// 7-bit ASCII.
    pub const ASCII: Alphabet = Alphabet { first: 0, last: 127 };
    /// Printable ASCII without space, `!` through `~`.
    pub const PRINTABLE: Alphabet = Alphabet {
        first: b'!',
        last: b'~',
    };

    pub fn new(first: u8, last: u8) -> Result<Self, SearchError> {
        if first > last {
            return Err(SearchError::InvalidAlphabet { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn last(&self) -> u8 {
        self.last
    }

    /// Number of table columns.
    pub fn size(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn contains(&self, symbol: u8) -> bool {
        (self.first..=self.last).contains(&symbol)
    }

    /// Table column for `symbol`, or `None` if it lies outside the range.
    #[inline]
    pub fn column(&self, symbol: u8) -> Option<usize> {
        if self.contains(symbol) {
            Some((symbol - self.first) as usize)
        } else {
            None
        }
    }

    /// Checks every symbol up front and reports the first one out of range.
    pub fn validate(&self, input: Input, symbols: &[u8]) -> Result<(), SearchError> {
        // BYTES accepts everything; skip the pass
        if *self == Self::BYTES {
            return Ok(());
        }
        match symbols.iter().position(|&b| !self.contains(b)) {
            None => Ok(()),
            Some(position) => Err(SearchError::OutOfAlphabet {
                input,
                position,
                symbol: symbols[position],
                alphabet: *self,
            }),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BYTES
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl FromStr for Alphabet {
    type Err = String;

    /// Accepts `bytes`, `ascii`, `printable`, or a decimal range `FIRST-LAST`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bytes" => Ok(Self::BYTES),
            "ascii" => Ok(Self::ASCII),
            "printable" => Ok(Self::PRINTABLE),
            range => {
                let (first, last) = range
                    .split_once('-')
                    .ok_or_else(|| format!("expected bytes, ascii, printable or FIRST-LAST, got {s:?}"))?;
                let first: u8 = first
                    .trim()
                    .parse()
                    .map_err(|e| format!("invalid first symbol {first:?}: {e}"))?;
                let last: u8 = last
                    .trim()
                    .parse()
                    .map_err(|e| format!("invalid last symbol {last:?}: {e}"))?;
                Self::new(first, last).map_err(|e| e.to_string())
            }
        }
    }
}
