use {
    std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    swap_app::TransferGateway,
    swap_types::{Name, Transfer},
};

/// A transfer gateway that records what it was asked to send.
///
/// It can be given a quota with [`RecordingGateway::failing_after`]: a batch
/// that would push the number of sent transfers past the quota is refused as
/// a whole, and nothing from it is recorded.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(Name, Transfer)>>,
    total: AtomicUsize,
    quota: Option<usize>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every transfer.
    pub fn failing() -> Self {
        Self::failing_after(0)
    }

    /// Accept the first `quota` transfers, and refuse any batch containing a
    /// transfer beyond that.
    pub fn failing_after(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Default::default()
        }
    }

    /// Return the transfers dispatched so far and forget them.
    pub fn take(&self) -> Vec<Transfer> {
        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|err| panic!("poisoned lock: {err:?}"));
        sent.drain(..).map(|(_, transfer)| transfer).collect()
    }
}

impl TransferGateway for RecordingGateway {
    type Error = String;

    fn transfer_all(&self, from: Name, transfers: &[Transfer]) -> Result<(), Self::Error> {
        let mut sent = self.sent.lock().map_err(|err| err.to_string())?;

        let total = self.total.load(Ordering::SeqCst);

        if let Some(quota) = self.quota {
            if total + transfers.len() > quota {
                let refused = &transfers[quota.saturating_sub(total)];
                return Err(format!("transfer of {refused} from {from} refused"));
            }
        }

        self.total.fetch_add(transfers.len(), Ordering::SeqCst);
        sent.extend(transfers.iter().map(|transfer| (from, transfer.clone())));

        Ok(())
    }
}
