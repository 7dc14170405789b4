use thiserror::Error;

use super::config::AppConfig;
use crate::types::generation_task::NewTaskRequest;
use crate::types::page_query::PageQuery;

/// Rejection of a single input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

/// Trims the topic and checks it against the configured length limit.
pub fn validate_topic(config: &AppConfig, topic: &str) -> Result<String, ValidationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ValidationError {
            field: "topic",
            reason: "must not be empty".to_string(),
        });
    }
    if topic.len() > config.task_max_topic_bytes {
        return Err(ValidationError {
            field: "topic",
            reason: format!(
                "is too long. Maximum allowed is {} bytes",
                config.task_max_topic_bytes
            ),
        });
    }

    Ok(topic.to_string())
}

pub fn validate_question_count(
    config: &AppConfig,
    question_count: u32,
) -> Result<u32, ValidationError> {
    if question_count == 0 {
        return Err(ValidationError {
            field: "question_count",
            reason: "must be at least 1".to_string(),
        });
    }
    if question_count > config.task_max_questions {
        return Err(ValidationError {
            field: "question_count",
            reason: format!(
                "is too large. Maximum allowed is {}",
                config.task_max_questions
            ),
        });
    }

    Ok(question_count)
}

/// Checks the metadata announced for an upload before any bytes move.
pub fn validate_upload_file(
    config: &AppConfig,
    file_name: &str,
    bytes_total: u64,
) -> Result<(), ValidationError> {
    if file_name.trim().is_empty() {
        return Err(ValidationError {
            field: "file_name",
            reason: "must not be empty".to_string(),
        });
    }
    if bytes_total == 0 {
        return Err(ValidationError {
            field: "bytes_total",
            reason: "must not be zero".to_string(),
        });
    }
    if bytes_total > config.upload_max_file_bytes {
        return Err(ValidationError {
            field: "bytes_total",
            reason: format!(
                "is too large. Maximum allowed is {} bytes",
                config.upload_max_file_bytes
            ),
        });
    }

    Ok(())
}

/// Validates a task request field by field and returns the normalized request.
pub fn validate_new_task(
    config: &AppConfig,
    request: &NewTaskRequest,
) -> Result<NewTaskRequest, ValidationError> {
    let topic = validate_topic(config, &request.topic)?;
    let question_count = validate_question_count(config, request.question_count)?;
    if let Some(file_name) = &request.source_file_name {
        if file_name.trim().is_empty() {
            return Err(ValidationError {
                field: "source_file_name",
                reason: "must not be empty".to_string(),
            });
        }
    }

    Ok(NewTaskRequest {
        topic,
        question_count,
        source_file_name: request.source_file_name.clone(),
    })
}

/// Resolves a page query into a `(page, per_page)` pair ready for slicing.
pub fn validate_page_query(
    config: &AppConfig,
    query: &PageQuery,
) -> Result<(usize, usize), ValidationError> {
    let page = match query.page {
        Some(0) | None => 1,
        Some(page) => page,
    };

    let per_page = query.per_page.unwrap_or(config.list_per_page);
    if per_page == 0 {
        return Err(ValidationError {
            field: "per_page",
            reason: "must be at least 1".to_string(),
        });
    }
    if per_page > config.list_max_per_page {
        return Err(ValidationError {
            field: "per_page",
            reason: format!(
                "is too large. Maximum allowed is {}",
                config.list_max_per_page
            ),
        });
    }

    Ok((page, per_page))
}
