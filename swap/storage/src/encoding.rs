use std::borrow::Cow;

/// Combine a namespace and one or more keys into a full byte path.
///
/// The namespace and all keys other than the last one are prefixed with
/// their lengths (2 bytes big-endian). This helps us know where a key ends
/// and where the next key starts.
///
/// E.g. if keys are [key1, key2, key3], the resulting byte path is:
/// len(namespace) | namespace | len(key1) | key1 | len(key2) | key2 | key3
///
/// Panics if any key's length exceeds u16::MAX.
pub fn nested_namespaces_with_key(
    maybe_namespace: Option<&[u8]>,
    prefixes: &[Cow<[u8]>],
    maybe_key: Option<&Cow<[u8]>>,
) -> Vec<u8> {
    let mut size = 0;
    if let Some(namespace) = maybe_namespace {
        size += namespace.len() + 2;
    }
    for prefix in prefixes {
        size += prefix.len() + 2;
    }
    if let Some(key) = maybe_key {
        size += key.len();
    }

    let mut out = Vec::with_capacity(size);
    if let Some(namespace) = maybe_namespace {
        out.extend_from_slice(&encode_length(namespace));
        out.extend_from_slice(namespace);
    }
    for prefix in prefixes {
        out.extend_from_slice(&encode_length(prefix));
        out.extend_from_slice(prefix);
    }
    if let Some(key) = maybe_key {
        out.extend_from_slice(key);
    }
    out
}

/// Encode the length of a byte slice as 2 bytes big-endian.
fn encode_length(bytes: impl AsRef<[u8]>) -> [u8; 2] {
    let len = bytes.as_ref().len();
    if len > 0xffff {
        panic!("can't encode length because byte slice is too long: {len} > {}", u16::MAX);
    }

    (len as u16).to_be_bytes()
}

/// Given an exclusive upper bound for scanning all keys that start with
/// `prefix`, returns `prefix` with its last byte incremented, carrying over
/// `0xff` bytes. Returns `None` if every byte is `0xff`, meaning the scan has
/// no upper bound.
pub fn increment_last_byte(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bytes = prefix.to_vec();
    while let Some(last) = bytes.pop() {
        if last < u8::MAX {
            bytes.push(last + 1);
            return Some(bytes);
        }
    }
    None
}

/// Strip the namespace from the beginning of a key.
pub fn trim(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    key[namespace.len()..].to_vec()
}

// ----------------------------------- tests -----------------------------------
