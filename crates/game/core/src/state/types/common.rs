use std::fmt;
use std::str::FromStr;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Discrete grid position expressed in cell coordinates.
///
/// A position may hold coordinates outside the grid (they arrive unchecked
/// from action text); use [`Position::is_valid`] before trusting one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True when both coordinates lie inside the grid.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.x < GameConfig::GRID_SIZE && self.y < GameConfig::GRID_SIZE
    }

    /// Applies a signed offset. `None` if either coordinate would leave `u8`.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    /// Row-major index of a valid position.
    pub(crate) fn index(self) -> usize {
        self.y as usize * GameConfig::GRID_SIZE as usize + self.x as usize
    }

    /// Inverse of [`Position::index`].
    pub(crate) fn from_index(index: usize) -> Self {
        let side = GameConfig::GRID_SIZE as usize;
        Self::new((index % side) as u8, (index / side) as u8)
    }

    /// Approach score used by enemies to rank candidate cells against `target`.
    ///
    /// `(target.x - min(self.x, target.x)) + (target.y - min(self.y, target.y))`
    ///
    /// This is not a metric: any axis on which `self` lies past `target`
    /// contributes zero. Enemy behavior depends on this exact formula, so it
    /// must not be replaced with Manhattan distance.
    pub fn approach_score(self, target: Position) -> u16 {
        let dx = target.x - self.x.min(target.x);
        let dy = target.y - self.y.min(target.y);
        dx as u16 + dy as u16
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GameConfig::CELL_COUNT).map(Self::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors raised when building an [`Identity`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity must not be empty")]
    Empty,

    #[error("identity is {len} bytes long (max: {max})")]
    TooLong { len: usize, max: usize },

    #[error("identity contains invalid character {0:?}")]
    InvalidChar(char),
}

impl GameError for IdentityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "IDENTITY_EMPTY",
            Self::TooLong { .. } => "IDENTITY_TOO_LONG",
            Self::InvalidChar(_) => "IDENTITY_INVALID_CHAR",
        }
    }
}

/// Stable token naming one persisted game session.
///
/// Non-empty, at most [`GameConfig::IDENTITY_LEN`] bytes of `[A-Za-z0-9_-]`.
/// The character set keeps it safe both inside the comma-separated action
/// text and as a file name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity {
    bytes: [u8; GameConfig::IDENTITY_LEN],
    len: u8,
}

impl Identity {
    pub fn new(name: &str) -> Result<Self, IdentityError> {
        if name.is_empty() {
            return Err(IdentityError::Empty);
        }
        if name.len() > GameConfig::IDENTITY_LEN {
            return Err(IdentityError::TooLong {
                len: name.len(),
                max: GameConfig::IDENTITY_LEN,
            });
        }
        if let Some(bad) = name.chars().find(|c| !Self::is_allowed(*c)) {
            return Err(IdentityError::InvalidChar(bad));
        }

        let mut bytes = [0u8; GameConfig::IDENTITY_LEN];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self {
            bytes,
            len: name.len() as u8,
        })
    }

    /// Rebuilds an identity from its zero-padded fixed-width form.
    pub fn from_padded(padded: &[u8; GameConfig::IDENTITY_LEN]) -> Result<Self, IdentityError> {
        let len = padded.iter().position(|b| *b == 0).unwrap_or(padded.len());
        if padded[len..].iter().any(|b| *b != 0) {
            return Err(IdentityError::InvalidChar('\0'));
        }
        let name = std::str::from_utf8(&padded[..len])
            .map_err(|_| IdentityError::InvalidChar(char::REPLACEMENT_CHARACTER))?;
        Self::new(name)
    }

    /// Zero-padded fixed-width form used by the binary record.
    pub fn to_padded(&self) -> [u8; GameConfig::IDENTITY_LEN] {
        self.bytes
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    const fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.as_str()).finish()
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <&str>::deserialize(deserializer)?;
        Self::new(name).map_err(serde::de::Error::custom)
    }
}
