pub mod client;
pub mod filesystem;
pub mod user;
