mod repo;
mod tree;
mod user;

pub use repo::*;
pub use tree::*;
pub use user::*;
