use {
    crate::{Map, Order, PrimaryKey, StdResult, Storage},
    borsh::{BorshDeserialize, BorshSerialize},
};

// ----------------------------------- traits ----------------------------------

/// A secondary index over the records of an [`IndexedMap`].
pub trait Index<K, T> {
    fn save(&self, storage: &mut dyn Storage, pk: K, data: &T) -> StdResult<()>;

    fn remove(&self, storage: &mut dyn Storage, pk: K, old_data: &T);
}

/// The set of indexes an [`IndexedMap`] keeps up to date.
pub trait IndexList<K, T> {
    fn get_indexes(&self) -> Box<dyn Iterator<Item = &'_ dyn Index<K, T>> + '_>;
}

// -------------------------------- indexed map --------------------------------

/// A map whose writes also maintain one or more secondary indexes.
///
/// Records are only ever inserted or overwritten, never deleted, so there is
/// no `remove`.
pub struct IndexedMap<'a, K, T, I> {
    primary: Map<'a, K, T>,
    pub idx: I,
}

impl<'a, K, T, I> IndexedMap<'a, K, T, I> {
    pub const fn new(pk_namespace: &'a str, indexes: I) -> Self {
        IndexedMap {
            primary: Map::new(pk_namespace),
            idx: indexes,
        }
    }
}

impl<K, T, I> IndexedMap<'_, K, T, I>
where
    K: PrimaryKey + Clone,
    T: BorshSerialize + BorshDeserialize,
    I: IndexList<K, T>,
{
    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.primary.is_empty(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.primary.may_load(storage, key)
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b>
    where
        K: 'b,
    {
        self.primary.keys(storage, order)
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
        self.primary.range(storage, order)
    }

    /// Save a record. If one was already stored under the key, its index
    /// entries are dropped first, since the new record may index differently.
    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        if let Some(old) = self.may_load(storage, key.clone())? {
            for index in self.idx.get_indexes() {
                index.remove(storage, key.clone(), &old);
            }
        }

        for index in self.idx.get_indexes() {
            index.save(storage, key.clone(), data)?;
        }

        self.primary.save(storage, key, data)
    }
}
