use crate::config::{ContactConfig, SiteConfig, SiteIdentity};
use crate::core::form::FormState;
use crate::domain::model::{
    EmailPayload, Status, SubmissionPhase, SubmitOutcome, EMAIL_KEY, MESSAGE_KEY, NAME_KEY,
};
use crate::domain::ports::EmailSender;
use crate::render::{self, SectionView};
use crate::utils::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long the success banner stays up.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// Owned copy of the component state, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub form: FormState,
    pub status: Status,
    pub busy: bool,
    pub phase: SubmissionPhase,
}

#[derive(Debug)]
struct ContactState {
    form: FormState,
    status: Status,
    busy: bool,
    phase: SubmissionPhase,
    /// Bumped on every send; a clear task only acts on its own attempt.
    attempt: u64,
    clear_task: Option<JoinHandle<()>>,
}

/// The contact form: field state, submission state machine and rendering.
pub struct ContactSection<S: EmailSender> {
    site: SiteIdentity,
    contact: ContactConfig,
    sender: S,
    clear_delay: Duration,
    state: Arc<Mutex<ContactState>>,
}

impl<S: EmailSender> ContactSection<S> {
    pub fn new(config: &SiteConfig, sender: S) -> Self {
        let state = ContactState {
            form: FormState::new(&config.contact.form),
            status: Status::idle(),
            busy: false,
            phase: SubmissionPhase::Idle,
            attempt: 0,
            clear_task: None,
        };
        Self {
            site: config.site.clone(),
            contact: config.contact.clone(),
            sender,
            clear_delay: STATUS_CLEAR_DELAY,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    fn lock(&self) -> MutexGuard<'_, ContactState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces one field's value. Editing the email field also refreshes its inline error.
    pub fn set_field(&self, key: &str, value: &str) -> Result<()> {
        self.lock().form.set_field(key, value)
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        let state = self.lock();
        ContactSnapshot {
            form: state.form.clone(),
            status: state.status.clone(),
            busy: state.busy,
            phase: state.phase,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    pub fn status(&self) -> Status {
        self.lock().status.clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lock().phase
    }

    pub fn value(&self, key: &str) -> String {
        self.lock().form.get(key).to_string()
    }

    pub fn email_error(&self) -> String {
        self.lock().form.email_error().to_string()
    }

    pub fn render(&self) -> SectionView {
        render::render_section(&self.contact, &self.snapshot())
    }

    fn build_payload(&self, form: &FormState) -> EmailPayload {
        EmailPayload {
            from_name: form.get(NAME_KEY).to_string(),
            to_name: self.site.full_name.clone(),
            reply_to: form.get(EMAIL_KEY).to_string(),
            to_email: self.site.email.clone(),
            message: form.get(MESSAGE_KEY).to_string(),
        }
    }

    /// Validates and sends the current form.
    ///
    /// Never fails: a rejected send becomes an error status, and a submit
    /// while a send is outstanding is ignored.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.lock();
            if state.busy {
                tracing::warn!("Submit ignored: a message is already being sent");
                return SubmitOutcome::AlreadySending;
            }

            state.phase = SubmissionPhase::Validating;
            if !state.form.revalidate_email() {
                tracing::debug!("Submit blocked by invalid email");
                state.phase = SubmissionPhase::Idle;
                return SubmitOutcome::InvalidEmail;
            }

            // A pending auto-clear belongs to the previous attempt.
            if let Some(task) = state.clear_task.take() {
                task.abort();
            }
            state.attempt += 1;
            state.status = Status::idle();
            state.busy = true;
            state.phase = SubmissionPhase::Sending;
            self.build_payload(&state.form)
        };

        tracing::debug!("Sending contact message from {}", payload.reply_to);
        let result = self.sender.send(&payload).await;

        let mut state = self.lock();
        state.busy = false;
        match result {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                state.status = Status::success();
                state.form.reset();
                state.phase = SubmissionPhase::Succeeded;
                let attempt = state.attempt;
                state.clear_task = Some(self.schedule_clear(attempt));
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    "Contact message failed: {} (Category: {:?}, retryable: {})",
                    e,
                    e.category(),
                    e.is_retryable()
                );
                state.status = Status::error();
                state.phase = SubmissionPhase::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    // `abort` cannot stop a task already waiting on the lock, hence the attempt check.
    fn schedule_clear(&self, attempt: u64) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let delay = self.clear_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.attempt != attempt {
                tracing::debug!("Stale status clear skipped");
                return;
            }
            state.status = Status::idle();
            state.phase = SubmissionPhase::Idle;
            state.clear_task = None;
            tracing::debug!("Status message cleared");
        })
    }
}

impl<S: EmailSender> Drop for ContactSection<S> {
    fn drop(&mut self) {
        if let Some(task) = self.lock().clear_task.take() {
            task.abort();
        }
    }
}
