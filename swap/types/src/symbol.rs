use {
    crate::{ParseError, ParseResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{borrow::Cow, fmt, str::FromStr},
};

/// The maximum number of characters in an asset code.
pub const SYMBOL_CODE_MAX_LEN: usize = 7;

// -------------------------------- symbol code --------------------------------

/// An asset code of up to 7 ascii characters, packed little-endian into a
/// `u64`: the first character occupies the lowest byte.
///
/// Parsing only enforces length and ascii. Whether the code is acceptable for
/// registration is a separate question answered by [`SymbolCode::is_valid`].
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct SymbolCode(u64);

impl SymbolCode {
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// A valid code is non-empty, consists only of `A-Z`, and has no zero
    /// bytes between characters.
    pub fn is_valid(self) -> bool {
        let bytes = self.0.to_le_bytes();
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

        len > 0
            && len <= SYMBOL_CODE_MAX_LEN
            && bytes[..len].iter().all(u8::is_ascii_uppercase)
            && bytes[len..].iter().all(|&b| b == 0)
    }
}

impl FromStr for SymbolCode {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        if !s.is_ascii() {
            return Err(ParseError::SymbolCodeNotAscii {
                input: s.to_string(),
            });
        }

        if s.len() > SYMBOL_CODE_MAX_LEN {
            return Err(ParseError::SymbolCodeTooLong {
                input: s.to_string(),
            });
        }

        let value = s
            .bytes()
            .rev()
            .fold(0u64, |value, b| (value << 8) | b as u64);

        Ok(Self(value))
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_le_bytes();
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

        f.write_str(&String::from_utf8_lossy(&bytes[..len]))
    }
}

// ---------------------------------- symbol -----------------------------------

/// An asset code together with the number of decimal places its amounts
/// carry. Text form: `<precision>,<CODE>`, e.g. `4,EOS`.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Symbol {
    pub precision: u8,
    pub code: SymbolCode,
}

impl Symbol {
    pub const fn new(precision: u8, code: SymbolCode) -> Self {
        Self { precision, code }
    }

    /// The packed form: `code << 8 | precision`.
    pub const fn raw(self) -> u64 {
        (self.code.raw() << 8) | self.precision as u64
    }

    pub fn is_valid(self) -> bool {
        self.code.is_valid()
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let malformed = || ParseError::SymbolMalformed {
            input: s.to_string(),
        };

        let (precision, code) = s.split_once(',').ok_or_else(malformed)?;
        let precision = precision.trim().parse().map_err(|_| malformed())?;
        let code = code.trim().parse()?;

        Ok(Self { precision, code })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <Cow<str> as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------
