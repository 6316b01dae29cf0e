use {
    std::convert::Infallible,
    swap_app::TransferGateway,
    swap_types::{Name, Transfer},
};

/// There's no token contract behind the CLI, so transfers only get logged.
pub struct LoggingGateway;

impl TransferGateway for LoggingGateway {
    type Error = Infallible;

    fn transfer_all(&self, from: Name, transfers: &[Transfer]) -> Result<(), Self::Error> {
        for transfer in transfers {
            tracing::info!(
                from = from.to_string(),
                to = transfer.to.to_string(),
                quantity = transfer.quantity().to_string(),
                issuer = transfer.token.issuer.to_string(),
                "Transfer sent"
            );
        }

        Ok(())
    }
}
