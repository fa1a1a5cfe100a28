pub mod activity;
pub mod attendance;
pub mod employee;
pub mod role;
pub mod wage_summary;
