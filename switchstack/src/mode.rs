use std::fmt;
use std::str::FromStr;

/// Which end of a [`Stack`](crate::stack::Stack) `peek` and `pop` take from.
///
/// Numeric codes follow declaration order: `0` is FIFO, `1` is LIFO.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// First in, first out. Removal from the front.
    #[default]
    Fifo,
    /// Last in, first out. Removal from the back.
    Lifo,
}

impl Mode {
    pub fn code(self) -> u8 {
        match self {
            Mode::Fifo => 0,
            Mode::Lifo => 1,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Mode {
        match self {
            Mode::Fifo => Mode::Lifo,
            Mode::Lifo => Mode::Fifo,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.opposite();
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fifo => f.write_str("fifo"),
            Mode::Lifo => f.write_str("lifo"),
        }
    }
}

/// A mode request that names neither FIFO nor LIFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMode {
    Code(u8),
    Name(String),
}

impl fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "invalid mode code: {code}"),
            Self::Name(name) => write!(f, "invalid mode name: {name:?}"),
        }
    }
}

impl std::error::Error for InvalidMode {}

impl TryFrom<u8> for Mode {
    type Error = InvalidMode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Mode::Fifo),
            1 => Ok(Mode::Lifo),
            other => Err(InvalidMode::Code(other)),
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = InvalidMode;

    // Accepts the discipline names as well as the container they describe.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("fifo") || trimmed.eq_ignore_ascii_case("queue") {
            Ok(Mode::Fifo)
        } else if trimmed.eq_ignore_ascii_case("lifo") || trimmed.eq_ignore_ascii_case("stack") {
            Ok(Mode::Lifo)
        } else {
            Err(InvalidMode::Name(name.to_string()))
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::try_from(s)
    }
}
