pub mod setup;
pub mod users;
