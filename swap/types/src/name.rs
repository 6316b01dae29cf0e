use {
    crate::{ParseError, ParseResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{borrow::Cow, fmt, str::FromStr},
    swap_storage::{Prefixer, PrimaryKey, StdError, StdResult},
};

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// The maximum number of characters in the text form of a name.
pub const NAME_MAX_LEN: usize = 13;

/// An account or issuing-authority name.
///
/// A name is a 64-bit value with a base-32 text form of up to 13 characters.
/// The first 12 characters take 5 bits each, drawn from `.12345a-z`; the
/// optional 13th character takes the remaining 4 bits, so it is limited to
/// `.1-5a-j`. Ordering and equality follow the 64-bit value.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Name(u64);

impl Name {
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

fn char_to_value(input: &str, ch: char) -> ParseResult<u64> {
    match ch {
        'a'..='z' => Ok(ch as u64 - 'a' as u64 + 6),
        '1'..='5' => Ok(ch as u64 - '1' as u64 + 1),
        '.' => Ok(0),
        _ => Err(ParseError::NameInvalidChar {
            input: input.to_string(),
            ch,
        }),
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let chars = s.chars().collect::<Vec<_>>();

        if chars.len() > NAME_MAX_LEN {
            return Err(ParseError::NameTooLong {
                input: s.to_string(),
            });
        }

        let head = chars.len().min(12);
        let mut value = 0u64;
        for &ch in &chars[..head] {
            value <<= 5;
            value |= char_to_value(s, ch)?;
        }

        // Empty names shift every bit out.
        value = value.checked_shl((4 + 5 * (12 - head)) as u32).unwrap_or(0);

        if let Some(&last) = chars.get(12) {
            let v = char_to_value(s, last)?;
            if v > 0x0f {
                return Err(ParseError::NameInvalidLastChar {
                    input: s.to_string(),
                });
            }
            value |= v;
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; NAME_MAX_LEN];
        let mut tmp = self.0;

        for i in 0..NAME_MAX_LEN {
            let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            out[12 - i] = CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let len = out.iter().rposition(|&b| b != b'.').map_or(0, |pos| pos + 1);
        // Every byte comes from `CHARMAP`, which is ascii.
        let text = std::str::from_utf8(&out[..len]).map_err(|_| fmt::Error)?;

        f.write_str(text)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <Cow<str> as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl PrimaryKey for Name {
    type Output = Name;
    type Prefix = ();
    type Suffix = ();

    const KEY_ELEMS: u8 = 1;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Owned(self.0.to_be_bytes().to_vec())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let Ok(bytes) = <[u8; 8]>::try_from(bytes) else {
            return Err(StdError::deserialize::<Self::Output, _>(
                "key",
                format!("wrong number of bytes: expecting 8, got {}", bytes.len()),
            ));
        };

        Ok(Self(u64::from_be_bytes(bytes)))
    }
}

impl Prefixer for Name {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        self.raw_keys()
    }
}

// ----------------------------------- tests -----------------------------------
