use {
    crate::{
        Index, Map, Order, Prefix, Prefixer, PrimaryKey, StdError, StdResult, Storage,
        codec::decode,
    },
    borsh::BorshDeserialize,
};

// -------------------------------- multi index --------------------------------

/// An indexer that allows multiple records in the primary map to have the same
/// index value.
///
/// Index entries are stored as `(index key, primary key) => ()`, so records
/// sharing an index value are visited in ascending primary key order.
pub struct MultiIndex<'a, PK, IK, T> {
    indexer: fn(&PK, &T) -> IK,
    index_map: Map<'a, (IK, PK), ()>,
    primary_map: Map<'a, PK, T>,
}

impl<'a, PK, IK, T> MultiIndex<'a, PK, IK, T> {
    pub const fn new(
        indexer: fn(&PK, &T) -> IK,
        pk_namespace: &'a str,
        idx_namespace: &'a str,
    ) -> Self {
        MultiIndex {
            indexer,
            index_map: Map::new(idx_namespace),
            primary_map: Map::new(pk_namespace),
        }
    }
}

impl<'a, PK, IK, T> MultiIndex<'a, PK, IK, T>
where
    IK: PrimaryKey,
{
    /// The records sharing one index value.
    pub fn prefix(&self, idx: IK) -> IndexPrefix<'a, PK, T> {
        IndexPrefix {
            prefix: Prefix::new(self.index_map.namespace, &idx.raw_keys()),
            primary_map: self.primary_map,
        }
    }
}

impl<PK, IK, T> Index<PK, T> for MultiIndex<'_, PK, IK, T>
where
    PK: PrimaryKey,
    IK: PrimaryKey + Prefixer,
{
    fn save(&self, storage: &mut dyn Storage, pk: PK, data: &T) -> StdResult<()> {
        let idx = (self.indexer)(&pk, data);
        self.index_map.save(storage, (idx, pk), &())
    }

    fn remove(&self, storage: &mut dyn Storage, pk: PK, old_data: &T) {
        let idx = (self.indexer)(&pk, old_data);
        self.index_map.remove(storage, (idx, pk));
    }
}

// ------------------------------- index prefix --------------------------------

pub struct IndexPrefix<'a, PK, T> {
    prefix: Prefix<PK, ()>,
    primary_map: Map<'a, PK, T>,
}

impl<'a, PK, T> IndexPrefix<'a, PK, T>
where
    PK: PrimaryKey,
{
    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<PK::Output>> + 'b>
    where
        PK: 'b,
    {
        self.prefix.keys(storage, order)
    }

    /// The record with the lowest primary key under this index value, if any.
    pub fn first(&self, storage: &dyn Storage) -> StdResult<Option<(PK::Output, T)>>
    where
        T: BorshDeserialize,
    {
        let Some(pk_raw) = self.prefix.keys_raw(storage, Order::Ascending).next() else {
            return Ok(None);
        };

        let pk = PK::from_slice(&pk_raw)?;
        // Index and primary entries are written together, so a missing record
        // means the store was written around the indexed map.
        let v_raw = self
            .primary_map
            .may_load_raw(storage, &pk_raw)
            .ok_or_else(|| StdError::data_not_found::<T>(&pk_raw))?;

        Ok(Some((pk, decode(&v_raw)?)))
    }
}

// ----------------------------------- tests -----------------------------------
