use {
    crate::{
        Order, PrimaryKey, Record, StdResult, Storage, codec::decode, increment_last_byte,
        nested_namespaces_with_key, trim,
    },
    borsh::BorshDeserialize,
    std::{borrow::Cow, marker::PhantomData},
};

/// All records in a map whose keys start with a given byte prefix.
pub struct Prefix<K, T> {
    namespace: Vec<u8>,
    types: PhantomData<(K, T)>,
}

impl<K, T> Prefix<K, T> {
    pub fn new(top_name: &[u8], sub_names: &[Cow<[u8]>]) -> Self {
        Self {
            namespace: nested_namespaces_with_key(Some(top_name), sub_names, None),
            types: PhantomData,
        }
    }

    /// Iterate the raw key-value pairs under the prefix, keys with the prefix
    /// stripped.
    fn range_raw<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> impl Iterator<Item = Record> + 'b {
        let namespace = self.namespace.clone();
        let max = increment_last_byte(&namespace);

        storage
            .scan(Some(&namespace), max.as_deref(), order)
            .map(move |(k, v)| (trim(&namespace, &k), v))
    }

    pub(crate) fn keys_raw<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> impl Iterator<Item = Vec<u8>> + 'b {
        let namespace = self.namespace.clone();
        let max = increment_last_byte(&namespace);

        storage
            .scan_keys(Some(&namespace), max.as_deref(), order)
            .map(move |k| trim(&namespace, &k))
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.keys_raw(storage, Order::Ascending).next().is_none()
    }
}

impl<K, T> Prefix<K, T>
where
    K: PrimaryKey,
{
    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b>
    where
        K: 'b,
    {
        let iter = self
            .keys_raw(storage, order)
            .map(|k_raw| K::from_slice(&k_raw));

        Box::new(iter)
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'b>
    where
        K: 'b,
        T: BorshDeserialize + 'b,
    {
        let iter = self.range_raw(storage, order).map(|(k_raw, v_raw)| {
            let k = K::from_slice(&k_raw)?;
            let v = decode(&v_raw)?;
            Ok((k, v))
        });

        Box::new(iter)
    }
}
