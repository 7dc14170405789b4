use state_machines::state_machine;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;

/// Where an upload session currently stands, with the data that stage needs.
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UploadState {
    #[default]
    Idle,
    Preparing {
        file_name: String,
        bytes_total: u64,
    },
    Uploading {
        file_name: String,
        bytes_total: u64,
    },
    Complete {
        file_id: String,
    },
    Error {
        reason: String,
    },
}

impl UploadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Preparing { .. } => "preparing",
            UploadState::Uploading { .. } => "uploading",
            UploadState::Complete { .. } => "complete",
            UploadState::Error { .. } => "error",
        }
    }

    /// True once the flow has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            UploadState::Complete { .. } | UploadState::Error { .. }
        )
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            UploadState::Idle => "Idle",
            UploadState::Preparing { .. } => "Preparing",
            UploadState::Uploading { .. } => "Uploading",
            UploadState::Complete { .. } => "Uploaded",
            UploadState::Error { .. } => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum UploadEvent {
    Begin,
    StartUpload,
    Complete,
    Fail,
    Reset,
}

impl UploadEvent {
    fn as_str(&self) -> &'static str {
        match self {
            UploadEvent::Begin => "begin",
            UploadEvent::StartUpload => "start_upload",
            UploadEvent::Complete => "complete",
            UploadEvent::Fail => "fail",
            UploadEvent::Reset => "reset",
        }
    }
}

mod lifecycle {
    use super::state_machine;

    state_machine! {
        name: UploadLifecycleMachine,
        initial: Idle,
        states: [Idle, Preparing, Uploading, Complete, Errored],
        events {
            begin {
                transition: { from: Idle, to: Preparing }
                transition: { from: Errored, to: Preparing }
            }
            start_upload {
                transition: { from: Preparing, to: Uploading }
            }
            complete {
                transition: { from: Uploading, to: Complete }
            }
            fail {
                transition: { from: Preparing, to: Errored }
                transition: { from: Uploading, to: Errored }
            }
            reset {
                transition: { from: Complete, to: Idle }
                transition: { from: Errored, to: Idle }
            }
        }
    }

    pub(super) fn idle() -> UploadLifecycleMachine<(), Idle> {
        UploadLifecycleMachine::new(())
    }

    pub(super) fn preparing() -> UploadLifecycleMachine<(), Preparing> {
        idle()
            .begin()
            .expect("begin transition from Idle should exist")
    }

    pub(super) fn uploading() -> UploadLifecycleMachine<(), Uploading> {
        preparing()
            .start_upload()
            .expect("start_upload transition from Preparing should exist")
    }

    pub(super) fn completed() -> UploadLifecycleMachine<(), Complete> {
        uploading()
            .complete()
            .expect("complete transition from Uploading should exist")
    }

    pub(super) fn errored() -> UploadLifecycleMachine<(), Errored> {
        uploading()
            .fail()
            .expect("fail transition from Uploading should exist")
    }
}

fn invalid_transition(state: &UploadState, event: UploadEvent) -> AppError {
    AppError::Validation(format!(
        "Invalid upload transition: {} -> {}",
        state.as_str(),
        event.as_str()
    ))
}

fn ensure_transition(state: &UploadState, event: UploadEvent) -> Result<(), AppError> {
    use lifecycle::*;
    match (state, event) {
        (UploadState::Idle, UploadEvent::Begin) => idle()
            .begin()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Error { .. }, UploadEvent::Begin) => errored()
            .begin()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Preparing { .. }, UploadEvent::StartUpload) => preparing()
            .start_upload()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Uploading { .. }, UploadEvent::Complete) => uploading()
            .complete()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Preparing { .. }, UploadEvent::Fail) => preparing()
            .fail()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Uploading { .. }, UploadEvent::Fail) => uploading()
            .fail()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Complete { .. }, UploadEvent::Reset) => completed()
            .reset()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        (UploadState::Error { .. }, UploadEvent::Reset) => errored()
            .reset()
            .map(|_| ())
            .map_err(|_| invalid_transition(state, event)),
        _ => Err(invalid_transition(state, event)),
    }
}

/// Single owner of one file-upload flow.
///
/// All state changes go through the transition methods below; an invalid
/// event leaves the session untouched and reports the rejected pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UploadSession {
    pub id: String,
    pub user_id: String,
    pub state: UploadState,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UploadSession {
    pub fn new(user_id: String) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            state: UploadState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    /// Announces a file, moving the session to `Preparing`. Allowed from
    /// `Idle` and, as a retry, from `Error`.
    pub fn begin(&mut self, file_name: String, bytes_total: u64) -> Result<(), AppError> {
        ensure_transition(&self.state, UploadEvent::Begin)?;
        self.advance(UploadState::Preparing {
            file_name,
            bytes_total,
        });
        Ok(())
    }

    /// Starts moving bytes, carrying the announced file forward.
    pub fn start_upload(&mut self) -> Result<(), AppError> {
        ensure_transition(&self.state, UploadEvent::StartUpload)?;
        let next = match &self.state {
            UploadState::Preparing {
                file_name,
                bytes_total,
            } => UploadState::Uploading {
                file_name: file_name.clone(),
                bytes_total: *bytes_total,
            },
            _ => return Err(invalid_transition(&self.state, UploadEvent::StartUpload)),
        };
        self.advance(next);
        Ok(())
    }

    /// Records the stored file id and settles the session.
    pub fn complete(&mut self, file_id: String) -> Result<(), AppError> {
        ensure_transition(&self.state, UploadEvent::Complete)?;
        self.advance(UploadState::Complete { file_id });
        Ok(())
    }

    /// Settles the session with a failure reason.
    pub fn fail(&mut self, reason: String) -> Result<(), AppError> {
        ensure_transition(&self.state, UploadEvent::Fail)?;
        self.advance(UploadState::Error { reason });
        Ok(())
    }

    /// Returns a settled session to `Idle` for reuse.
    pub fn reset(&mut self) -> Result<(), AppError> {
        ensure_transition(&self.state, UploadEvent::Reset)?;
        self.advance(UploadState::Idle);
        Ok(())
    }

    fn advance(&mut self, next: UploadState) {
        debug!(
            session_id = %self.id,
            from = self.state.as_str(),
            to = next.as_str(),
            "upload session transition"
        );
        self.state = next;
        self.updated_at = chrono::Utc::now();
    }
}
