use uuid::Uuid;

use crate::{
    error::AppError,
    utils::{config::AppConfig, validation::validate_new_task},
};

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "Pending")]
    #[default]
    Pending,
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Failed")]
    Failed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Processing => "Processing",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Queued",
            TaskStatus::Processing => "Generating",
            TaskStatus::Completed => "Ready",
            TaskStatus::Failed => "Failed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

/// Client payload for requesting a new generation task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub topic: String,
    pub question_count: u32,
    pub source_file_name: Option<String>,
}

/// A queued flash-card generation job, as shared between the web and API
/// surfaces.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct GenerationTask {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub question_count: u32,
    pub source_file_name: Option<String>,
    pub status: TaskStatus,
    pub error_message: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl GenerationTask {
    pub fn new(request: NewTaskRequest, user_id: String) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            topic: request.topic,
            question_count: request.question_count,
            source_file_name: request.source_file_name,
            status: TaskStatus::Pending,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the request against the configured limits before
    /// constructing the task.
    pub fn from_request(
        config: &AppConfig,
        request: NewTaskRequest,
        user_id: String,
    ) -> Result<Self, AppError> {
        let request = validate_new_task(config, &request)?;
        Ok(Self::new(request, user_id))
    }
}
