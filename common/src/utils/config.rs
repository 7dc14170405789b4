use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_list_per_page")]
    pub list_per_page: usize,
    #[serde(default = "default_list_max_per_page")]
    pub list_max_per_page: usize,
    #[serde(default = "default_task_max_questions")]
    pub task_max_questions: u32,
    #[serde(default = "default_task_max_topic_bytes")]
    pub task_max_topic_bytes: usize,
    #[serde(default = "default_upload_max_file_bytes")]
    pub upload_max_file_bytes: u64,
}

fn default_list_per_page() -> usize {
    12
}

fn default_list_max_per_page() -> usize {
    100
}

fn default_task_max_questions() -> u32 {
    50
}

fn default_task_max_topic_bytes() -> usize {
    512
}

fn default_upload_max_file_bytes() -> u64 {
    25 * 1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            list_per_page: default_list_per_page(),
            list_max_per_page: default_list_max_per_page(),
            task_max_questions: default_task_max_questions(),
            task_max_topic_bytes: default_task_max_topic_bytes(),
            upload_max_file_bytes: default_upload_max_file_bytes(),
        }
    }
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
