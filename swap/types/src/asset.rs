use {
    crate::{ParseError, ParseResult, Symbol},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{borrow::Cow, fmt, str::FromStr},
};

/// An amount of some asset, in the asset's smallest unit.
///
/// Text form places `precision` decimals in the amount, e.g. an amount of
/// `10000` of `4,EOS` reads `1.0000 EOS`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    pub amount: u64,
    pub symbol: Symbol,
}

impl Asset {
    pub const fn new(amount: u64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }
}

impl FromStr for Asset {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let malformed = || ParseError::AssetMalformed {
            input: s.to_string(),
        };

        let (number, code) = s.trim().split_once(' ').ok_or_else(malformed)?;
        let (digits, precision) = match number.split_once('.') {
            Some((int, frac)) if !frac.is_empty() => (format!("{int}{frac}"), frac.len()),
            Some(_) => return Err(malformed()),
            None => (number.to_string(), 0),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let amount = digits.parse().map_err(|_| malformed())?;
        let precision = u8::try_from(precision).map_err(|_| malformed())?;
        let code = code.trim().parse()?;

        Ok(Self {
            amount,
            symbol: Symbol::new(precision, code),
        })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision as usize;

        if precision == 0 {
            return write!(f, "{} {}", self.amount, self.symbol.code);
        }

        let digits = format!("{:0>width$}", self.amount, width = precision + 1);
        let (int, frac) = digits.split_at(digits.len() - precision);

        write!(f, "{int}.{frac} {}", self.symbol.code)
    }
}

impl Serialize for Asset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <Cow<str> as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------
