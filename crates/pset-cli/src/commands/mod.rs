pub mod auth;
pub mod dispatch;
pub mod import;
pub mod init;
pub mod problem;
pub mod shared;
pub mod task;
