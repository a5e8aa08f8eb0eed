use crate::core::format::{summary_lines, SummaryLine};
use crate::core::pricing::derive_quote;
use crate::domain::model::{Amount, OfferRecord, Quote, Selection};
use crate::domain::ports::OfferStore;
use crate::utils::error::{OfferError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What happens to the selection once a save succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterSave {
    /// Keep the selection so the same offer can be tweaked and saved again.
    #[default]
    Keep,
    /// Start over from the default selection.
    Reset,
}

impl AfterSave {
    pub fn from_reset_flag(reset: bool) -> Self {
        if reset {
            AfterSave::Reset
        } else {
            AfterSave::Keep
        }
    }
}

/// Clears the in-flight flag when the save finishes, fails or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sends offers to the store, one at a time.
pub struct Submitter {
    store: Arc<dyn OfferStore>,
    in_flight: AtomicBool,
}

impl Submitter {
    pub fn new(store: Arc<dyn OfferStore>) -> Self {
        Self {
            store,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Persist `selection` together with its one-time total.
    ///
    /// A call made while another is still in flight fails with
    /// [`OfferError::SubmissionInProgress`] without touching the store.
    pub async fn submit(&self, selection: &Selection, one_time_total: Amount) -> Result<OfferRecord> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            tracing::warn!("Save already in progress, ignoring duplicate submit");
            return Err(OfferError::SubmissionInProgress);
        }
        let _guard = InFlight(&self.in_flight);

        let offer = selection.clone().into_new_offer(one_time_total);
        tracing::debug!(
            "Saving offer: site_type={}, pages={}, total={}",
            offer.site_type.id(),
            offer.page_count,
            one_time_total
        );

        match self.store.insert_offer(&offer).await {
            Ok(record) => {
                tracing::info!(
                    "✅ Offer saved with id {} (total {})",
                    record.id,
                    record.offer.one_time_total
                );
                Ok(record)
            }
            Err(e) => {
                tracing::error!("❌ Error saving offer: {}", e);
                Err(e)
            }
        }
    }
}

/// One user's estimator: the live selection plus the means to save it.
pub struct QuoteSession {
    selection: Selection,
    submitter: Submitter,
    after_save: AfterSave,
}

impl QuoteSession {
    pub fn new(store: Arc<dyn OfferStore>, after_save: AfterSave) -> Self {
        Self::with_selection(store, after_save, Selection::default())
    }

    pub fn with_selection(
        store: Arc<dyn OfferStore>,
        after_save: AfterSave,
        selection: Selection,
    ) -> Self {
        Self {
            selection,
            submitter: Submitter::new(store),
            after_save,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn quote(&self) -> Quote {
        derive_quote(&self.selection)
    }

    pub fn summary(&self) -> Vec<SummaryLine> {
        summary_lines(&self.selection, &self.quote())
    }

    pub fn is_saving(&self) -> bool {
        self.submitter.is_busy()
    }

    /// Derive the current total and persist it with the selection.
    ///
    /// On failure the selection is left exactly as it was.
    pub async fn save(&mut self) -> Result<OfferRecord> {
        let total = self.quote().one_time_total;
        let record = self.submitter.submit(&self.selection, total).await?;

        if self.after_save == AfterSave::Reset {
            tracing::debug!("Resetting selection after save");
            self.selection = Selection::default();
        }

        Ok(record)
    }
}
