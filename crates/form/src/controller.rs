use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    state::{Command, FormMsg, FormState, update},
    transport::ContactTransport,
};

/// Owns the form state and runs the commands the reducer asks for.
///
/// One controller drives one form instance. `dispatch` takes `&mut self`,
/// so a second submit cannot start while the first one is awaited.
pub struct FormController<T> {
    state: FormState,
    transport: T,
}

impl<T: ContactTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            state: FormState::default(),
            transport,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies `msg`, then performs any resulting request and feeds its
    /// outcome back into the state.
    pub async fn dispatch(&mut self, msg: FormMsg) {
        let Some(Command::Send(payload)) = self.apply(msg) else {
            return;
        };

        info!(slots = payload.disponibilites.len(), "Submitting contact form");
        let outcome = self.transport.post_contact(&payload).await;
        debug!("Submission outcome: {:?}", outcome);

        self.apply(FormMsg::SubmitCompleted(outcome));
    }

    /// Submits the form, projecting slots from today's local date.
    pub async fn submit(&mut self) {
        self.submit_on(Local::now().date_naive()).await;
    }

    pub async fn submit_on(&mut self, today: NaiveDate) {
        self.dispatch(FormMsg::Submit { today }).await;
    }

    fn apply(&mut self, msg: FormMsg) -> Option<Command> {
        let (next, command) = update(std::mem::take(&mut self.state), msg);
        self.state = next;
        command
    }
}
