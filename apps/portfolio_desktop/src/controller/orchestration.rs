//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend thread. Returns false and sets `status` when
/// the queue cannot take it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Contact backend disconnected (possible startup/runtime failure)".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use portfolio_core::SubmissionTicket;

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, BackendCommand::Shutdown, &mut status));
        assert!(status.is_empty());

        let cancel = BackendCommand::CancelSubmission {
            ticket: SubmissionTicket(1),
        };
        assert!(!dispatch_backend_command(&tx, cancel, &mut status));
        assert!(status.contains("full"));

        drop(rx);
        assert!(!dispatch_backend_command(&tx, BackendCommand::Shutdown, &mut status));
        assert!(status.contains("disconnected"));
    }
}
