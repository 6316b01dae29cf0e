use {
    crate::{StdError, StdResult, nested_namespaces_with_key},
    std::{borrow::Cow, mem},
};

// ------------------------------------ key ------------------------------------

/// Describes a key used in mapping data structures, i.e. [`Map`](crate::Map)
/// and [`IndexedMap`](crate::IndexedMap).
///
/// Compound keys can be split into `Prefix` and `Suffix`, which are useful in
/// iterations.
pub trait PrimaryKey {
    /// The number of elements in a tuple key. 1 for singleton keys.
    ///
    /// Needed to find where the first subkey of a nested tuple ends.
    const KEY_ELEMS: u8;

    /// For tuple keys, the first element. Use `()` for singleton keys.
    type Prefix: Prefixer;

    /// For tuple keys, the elements _excluding_ the `Prefix`. Use `()` for
    /// singleton keys.
    type Suffix;

    /// The type that raw keys deserialize into.
    type Output;

    /// Convert the key into one or more _raw keys_.
    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    /// Serialize the raw keys into bytes.
    ///
    /// Each raw key, other than the last one, is prefixed by its length as a
    /// 16-bit big endian number:
    ///
    /// ```plain
    /// len(A) | A | len(B) | B | C
    /// ```
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    /// Deserialize the raw bytes into the output.
    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey + Prefixer,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);
    type Prefix = A;
    type Suffix = B;

    const KEY_ELEMS: u8 = A::KEY_ELEMS + B::KEY_ELEMS;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a_raw, b_raw) = split_first_key(A::KEY_ELEMS, bytes)?;

        let a = A::from_slice(&a_raw)?;
        let b = B::from_slice(b_raw)?;

        Ok((a, b))
    }
}

/// Given the raw bytes of a tuple key, split off the first subkey, which
/// consists of `key_elems` length-prefixed elements.
///
/// The returned subkey drops the length prefix of its last element, so it can
/// be fed straight into that subkey's `from_slice`.
pub fn split_first_key(key_elems: u8, value: &[u8]) -> StdResult<(Vec<u8>, &[u8])> {
    let mut remainder = value;
    let mut first_key = Vec::new();

    for i in 0..key_elems {
        let Some((len_slice, rest)) = remainder.split_at_checked(2) else {
            return Err(StdError::deserialize::<Vec<u8>, _>(
                "key",
                "missing length prefix",
            ));
        };

        // Elements other than the last one retain their length prefixes.
        if i < key_elems - 1 {
            first_key.extend_from_slice(len_slice);
        }

        let elem_len = u16::from_be_bytes([len_slice[0], len_slice[1]]) as usize;
        let Some((elem, rest)) = rest.split_at_checked(elem_len) else {
            return Err(StdError::deserialize::<Vec<u8>, _>(
                "key",
                format!("key element shorter than declared length {elem_len}"),
            ));
        };

        first_key.extend_from_slice(elem);
        remainder = rest;
    }

    Ok((first_key, remainder))
}

macro_rules! impl_unsigned_integer_key {
    ($($t:ty),+) => {
        $(impl PrimaryKey for $t {
            type Output = $t;
            type Prefix = ();
            type Suffix = ();

            const KEY_ELEMS: u8 = 1;

            fn raw_keys(&self) -> Vec<Cow<[u8]>> {
                vec![Cow::Owned(self.to_be_bytes().to_vec())]
            }

            fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
                let Ok(bytes) = <[u8; mem::size_of::<Self>()]>::try_from(bytes) else {
                    return Err(StdError::deserialize::<Self::Output, _>(
                        "key",
                        format!(
                            "wrong number of bytes: expecting {}, got {}",
                            mem::size_of::<Self>(),
                            bytes.len(),
                        ),
                    ));
                };

                Ok(Self::from_be_bytes(bytes))
            }
        }

        impl Prefixer for $t {
            fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
                self.raw_keys()
            }
        })*
    };
}

impl_unsigned_integer_key!(u8, u64, u128);

// ---------------------------------- prefix -----------------------------------

/// Describes a value that can be used as the prefix of a compound key.
pub trait Prefixer {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>>;
}

impl Prefixer for () {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        vec![]
    }
}

// ----------------------------------- tests -----------------------------------
