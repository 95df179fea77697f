//! Runtime bridge between UI command queue and backend event intake.

use std::{collections::HashMap, sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use portfolio_core::{
    ContactSubmitter, HttpSubmitter, SimulatedSubmitter, SubmissionError, SubmissionTask,
    SubmissionTicket,
};
use shared::protocol::ContactReceipt;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Where contact messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitterConfig {
    Simulated { delay: Duration },
    Http { endpoint: Url },
}

impl SubmitterConfig {
    pub fn from_parts(endpoint: Option<Url>, delay: Duration) -> Self {
        match endpoint {
            Some(endpoint) => Self::Http { endpoint },
            None => Self::Simulated { delay },
        }
    }

    pub fn build(&self) -> Arc<dyn ContactSubmitter> {
        match self {
            Self::Simulated { delay } => Arc::new(SimulatedSubmitter::new(*delay)),
            Self::Http { endpoint } => Arc::new(HttpSubmitter::new(endpoint.clone())),
        }
    }
}

/// Hands a finished submission to the UI. A full queue waits for the UI to drain
/// it, since a lost completion would leave the form submitting forever.
fn deliver_completion(
    events: &Sender<UiEvent>,
    ticket: SubmissionTicket,
    outcome: Result<ContactReceipt, SubmissionError>,
) {
    let event = UiEvent::SubmissionFinished { ticket, outcome };
    match events.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!(ticket = ticket.0, "ui event queue full; waiting to deliver completion");
            if tokio::task::block_in_place(|| events.send(event)).is_err() {
                tracing::debug!(ticket = ticket.0, "ui closed before completion was delivered");
            }
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!(ticket = ticket.0, "ui closed before completion was delivered");
        }
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: SubmitterConfig) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let submitter = config.build();
        let description = submitter.describe();
        tracing::info!(submitter = %description, "contact backend ready");
        let _ = ui_tx.try_send(UiEvent::Info(format!("Contact form: {description}")));

        let handle = runtime.handle().clone();
        let mut tasks: HashMap<SubmissionTicket, SubmissionTask> = HashMap::new();
        while let Ok(cmd) = cmd_rx.recv() {
            tasks.retain(|_, task| !task.is_finished());
            match cmd {
                BackendCommand::SubmitContact { pending } => {
                    let ticket = pending.ticket;
                    let events = ui_tx.clone();
                    let task = SubmissionTask::spawn(
                        &handle,
                        Arc::clone(&submitter),
                        pending,
                        move |ticket, outcome| {
                            if let Err(err) = &outcome {
                                tracing::warn!(ticket = ticket.0, "contact submission failed: {err}");
                            }
                            deliver_completion(&events, ticket, outcome);
                        },
                    );
                    tracing::debug!(ticket = ticket.0, "contact submission started");
                    tasks.insert(ticket, task);
                }
                BackendCommand::CancelSubmission { ticket } => {
                    if let Some(task) = tasks.remove(&ticket) {
                        task.cancel();
                    }
                }
                BackendCommand::Shutdown => break,
            }
        }

        tasks.clear();
        runtime.shutdown_timeout(Duration::from_millis(250));
        tracing::info!("contact backend stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use portfolio_core::PendingSubmission;
    use shared::domain::ContactMessage;

    fn pending(ticket: u64) -> PendingSubmission {
        PendingSubmission {
            ticket: SubmissionTicket(ticket),
            message: ContactMessage {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Hi".into(),
                message: "Hello there".into(),
            },
        }
    }

    fn next_finished(rx: &Receiver<UiEvent>) -> (SubmissionTicket, bool) {
        loop {
            match rx.recv_timeout(Duration::from_secs(5)).expect("ui event") {
                UiEvent::SubmissionFinished { ticket, outcome } => return (ticket, outcome.is_ok()),
                UiEvent::Info(_) => continue,
                UiEvent::Error(err) => panic!("unexpected error event: {}", err.message()),
            }
        }
    }

    #[test]
    fn endpoint_selects_http_submitter() {
        let endpoint = Url::parse("http://127.0.0.1:8787/contact").expect("url");
        let config = SubmitterConfig::from_parts(Some(endpoint.clone()), Duration::from_secs(1));
        assert_eq!(config, SubmitterConfig::Http { endpoint });
        assert!(config.build().describe().starts_with("http"));

        let config = SubmitterConfig::from_parts(None, Duration::from_millis(5));
        assert_eq!(
            config,
            SubmitterConfig::Simulated {
                delay: Duration::from_millis(5)
            }
        );
    }

    #[test]
    fn simulated_submission_round_trips_through_the_bridge() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        launch(
            cmd_rx,
            ui_tx,
            SubmitterConfig::Simulated {
                delay: Duration::from_millis(10),
            },
        );

        cmd_tx
            .send(BackendCommand::SubmitContact { pending: pending(1) })
            .expect("send");
        assert_eq!(next_finished(&ui_rx), (SubmissionTicket(1), true));
        cmd_tx.send(BackendCommand::Shutdown).expect("shutdown");
    }

    #[test]
    fn completion_waits_for_a_full_ui_queue() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(1);
        launch(
            cmd_rx,
            ui_tx,
            SubmitterConfig::Simulated {
                delay: Duration::from_millis(50),
            },
        );

        cmd_tx
            .send(BackendCommand::SubmitContact { pending: pending(1) })
            .expect("send");
        // The startup notice occupies the only slot until the submission has finished.
        thread::sleep(Duration::from_millis(300));
        assert!(matches!(
            ui_rx.recv_timeout(Duration::from_secs(5)).expect("startup info"),
            UiEvent::Info(_)
        ));
        assert_eq!(next_finished(&ui_rx), (SubmissionTicket(1), true));
        cmd_tx.send(BackendCommand::Shutdown).expect("shutdown");
    }

    #[test]
    fn cancelled_submission_never_reports() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        launch(
            cmd_rx,
            ui_tx,
            SubmitterConfig::Simulated {
                delay: Duration::from_millis(300),
            },
        );

        cmd_tx
            .send(BackendCommand::SubmitContact { pending: pending(1) })
            .expect("send");
        cmd_tx
            .send(BackendCommand::CancelSubmission {
                ticket: SubmissionTicket(1),
            })
            .expect("cancel");
        cmd_tx
            .send(BackendCommand::SubmitContact { pending: pending(2) })
            .expect("send");

        assert_eq!(next_finished(&ui_rx), (SubmissionTicket(2), true));
        cmd_tx.send(BackendCommand::Shutdown).expect("shutdown");
    }
}
