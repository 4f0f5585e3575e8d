pub mod duration;
pub mod edit;
pub mod help;
pub mod init;
pub mod log_task;
pub mod quit;
pub mod remaining;
pub mod summary;
pub mod toggles;
pub mod tracked;
