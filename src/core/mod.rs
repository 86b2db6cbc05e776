pub mod calendar;
pub mod filters;
pub mod logic;
pub mod notify;
pub mod pager;
pub mod suggest;
