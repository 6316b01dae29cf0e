use {
    crate::{PoolError, PoolResult},
    swap_types::Name,
};

/// Decides whether the invoking principal may act on behalf of an owner.
pub trait Authorizer {
    fn require_auth(&self, sender: Name, owner: Name) -> PoolResult<()>;
}

/// Only the owner may act for themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct SenderAuthorizer;

impl Authorizer for SenderAuthorizer {
    fn require_auth(&self, sender: Name, owner: Name) -> PoolResult<()> {
        if sender != owner {
            return Err(PoolError::Unauthorized { owner, sender });
        }

        Ok(())
    }
}
