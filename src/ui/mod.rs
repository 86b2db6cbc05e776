pub mod calendar;
pub mod list;
pub mod messages;
pub mod pagination;
