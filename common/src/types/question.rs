use uuid::Uuid;

/// A single generated flash-card question, ordered within its task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub task_id: String,
    pub prompt: String,
    pub answer: String,
    pub position: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Question {
    pub fn new(task_id: String, prompt: String, answer: String, position: u32) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            task_id,
            prompt,
            answer,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_defaults() {
        let question = Question::new(
            "task-1".to_string(),
            "What carries oxygen in blood?".to_string(),
            "Red blood cells".to_string(),
            0,
        );

        assert!(!question.id.is_empty());
        assert_eq!(question.task_id, "task-1");
        assert_eq!(question.position, 0);
        assert_eq!(question.created_at, question.updated_at);
    }

    #[test]
    fn every_question_gets_its_own_id() {
        let first = Question::new(
            "task-1".to_string(),
            "Q1".to_string(),
            "A1".to_string(),
            0,
        );
        let second = Question::new(
            "task-1".to_string(),
            "Q2".to_string(),
            "A2".to_string(),
            1,
        );

        assert_ne!(first.id, second.id);
    }
}
