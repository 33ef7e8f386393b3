//! Contact submission: form editing state plus the status machine.

use tokio::sync::mpsc;

use vitrine_backend::BackendUrl;
use vitrine_types::ui::ContactForm;
use vitrine_types::{ContactPayload, MissingField, SubmitStatus};

/// Completion report from a spawned submission task. One per attempt.
#[derive(Debug)]
pub enum SubmitEvent {
    Accepted,
    Rejected,
}

const SUBMIT_EVENT_CHANNEL_CAPACITY: usize = 1;

/// Owns the contact form and the channel its submission task reports on.
#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    receiver: Option<mpsc::Receiver<SubmitEvent>>,
}

impl ContactState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to submit the current form.
    ///
    /// Refused while a required field is blank (the offending field is
    /// reported; no request is issued). Otherwise the payload is built
    /// fresh, status moves to `Sending`, and the POST runs fire-and-forget.
    /// Rapid-fire submissions are not serialized; the status reflects the
    /// attempt whose channel is currently attached.
    pub fn submit(&mut self, base: &BackendUrl) -> Result<(), MissingField> {
        let payload = ContactPayload::new(
            self.form.name.value(),
            self.form.email.value(),
            self.form.message.value(),
        )?;

        self.status = SubmitStatus::Sending;
        let (tx, rx) = mpsc::channel(SUBMIT_EVENT_CHANNEL_CAPACITY);
        self.receiver = Some(rx);
        let base = base.clone();
        tokio::spawn(async move {
            let event = match vitrine_backend::submit_contact(&base, &payload).await {
                Ok(()) => SubmitEvent::Accepted,
                Err(err) => {
                    tracing::warn!(%err, "Contact submission failed");
                    SubmitEvent::Rejected
                }
            };
            let _ = tx.send(event).await;
        });
        Ok(())
    }

    /// Drain the completion event if it has arrived.
    ///
    /// `Sent` and `Failed` are terminal per attempt; a new [`Self::submit`]
    /// restarts the cycle from `Sending`.
    pub fn poll(&mut self) {
        if self.status != SubmitStatus::Sending {
            return;
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return;
        };
        match receiver.try_recv() {
            Ok(SubmitEvent::Accepted) => {
                self.status = SubmitStatus::Sent;
                self.receiver = None;
            }
            Ok(SubmitEvent::Rejected) => {
                self.status = SubmitStatus::Failed;
                self.receiver = None;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Submission task went away without reporting.
                self.status = SubmitStatus::Failed;
                self.receiver = None;
            }
        }
    }
}
