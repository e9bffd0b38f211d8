pub mod event;
pub mod role;
pub mod teacher;
