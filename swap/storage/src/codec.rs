use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
};

// Every record in the store is Borsh-encoded; keys are not, see `PrimaryKey`.

pub(crate) fn encode<T>(data: &T) -> StdResult<Vec<u8>>
where
    T: BorshSerialize,
{
    borsh::to_vec(data).map_err(|err| StdError::serialize::<T, _>("borsh", err))
}

pub(crate) fn decode<T>(bytes: &[u8]) -> StdResult<T>
where
    T: BorshDeserialize,
{
    borsh::from_slice(bytes).map_err(|err| StdError::deserialize::<T, _>("borsh", err))
}
