pub mod calendar;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod list;
pub mod suggest;
