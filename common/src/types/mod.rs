pub mod generation_task;
pub mod page_query;
pub mod question;
pub mod upload_session;
