use {
    std::fmt::Display,
    swap_types::{Name, Transfer},
};

/// Moves tokens out of the pool's account.
///
/// The host hands over every transfer an operation asks for in one batch,
/// before the operation's state changes are committed. An implementation must
/// send either all of them or none: on error, nothing may have left the pool.
pub trait TransferGateway {
    type Error: Display;

    fn transfer_all(&self, from: Name, transfers: &[Transfer]) -> Result<(), Self::Error>;
}
