use {
    crate::{
        Order, Prefix, Prefixer, PrimaryKey, StdResult, Storage,
        codec::{decode, encode},
        nested_namespaces_with_key,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    std::{borrow::Cow, marker::PhantomData},
};

/// A typed mapping from keys of type `K` to Borsh-encoded values of type `T`,
/// all living under one namespace.
pub struct Map<'a, K, T> {
    pub(crate) namespace: &'a [u8],
    types: PhantomData<(K, T)>,
}

impl<K, T> Clone for Map<'_, K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T> Copy for Map<'_, K, T> {}

impl<'a, K, T> Map<'a, K, T> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            types: PhantomData,
        }
    }

    fn storage_key(&self, key_raw: &[u8]) -> Vec<u8> {
        nested_namespaces_with_key(Some(self.namespace), &[], Some(&Cow::Borrowed(key_raw)))
    }

    /// Read the undecoded value stored under an already-joined key.
    pub(crate) fn may_load_raw(&self, storage: &dyn Storage, key_raw: &[u8]) -> Option<Vec<u8>> {
        storage.read(&self.storage_key(key_raw))
    }
}

impl<K, T> Map<'_, K, T>
where
    K: PrimaryKey,
{
    pub(crate) fn no_prefix(&self) -> Prefix<K, T> {
        Prefix::new(self.namespace, &[])
    }

    pub fn prefix(&self, prefix: K::Prefix) -> Prefix<K::Suffix, T> {
        Prefix::new(self.namespace, &prefix.raw_prefixes())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.no_prefix().is_empty(storage)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: K) {
        storage.remove(&self.storage_key(&key.joined_key()));
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b>
    where
        K: 'b,
    {
        self.no_prefix().keys(storage, order)
    }
}

impl<K, T> Map<'_, K, T>
where
    K: PrimaryKey,
    T: BorshSerialize + BorshDeserialize,
{
    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.may_load_raw(storage, &key.joined_key())
            .map(|bytes| decode(&bytes))
            .transpose()
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        let bytes = encode(data)?;
        storage.write(&self.storage_key(&key.joined_key()), &bytes);
        Ok(())
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'b>
    where
        K: 'b,
        T: 'b,
    {
        self.no_prefix().range(storage, order)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::MemStorage};

    const BALANCES: Map<(u64, u64), u128> = Map::new("b");

    #[test]
    fn save_and_remove() {
        let mut storage = MemStorage::new();

        assert_eq!(BALANCES.may_load(&storage, (1, 2)).unwrap(), None);

        BALANCES.save(&mut storage, (1, 2), &100).unwrap();
        assert_eq!(BALANCES.may_load(&storage, (1, 2)).unwrap(), Some(100));

        BALANCES.remove(&mut storage, (1, 2));
        assert_eq!(BALANCES.may_load(&storage, (1, 2)).unwrap(), None);
        assert!(BALANCES.is_empty(&storage));
    }

    #[test]
    fn prefix_iteration() {
        let mut storage = MemStorage::new();

        BALANCES.save(&mut storage, (1, 3), &13).unwrap();
        BALANCES.save(&mut storage, (1, 1), &11).unwrap();
        BALANCES.save(&mut storage, (2, 1), &21).unwrap();
        BALANCES.save(&mut storage, (256, 1), &2561).unwrap();

        let ones = BALANCES
            .prefix(1)
            .range(&storage, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(ones, vec![(1, 11), (3, 13)]);

        let last = BALANCES
            .keys(&storage, Order::Descending)
            .next()
            .transpose()
            .unwrap();
        assert_eq!(last, Some((256, 1)));
    }
}
