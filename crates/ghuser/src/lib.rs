pub mod cli;
pub mod endpoints;
pub mod filter;
pub mod models;
pub mod render;
pub mod session;
pub mod tree;
