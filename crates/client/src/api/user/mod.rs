//! Account endpoint operations

pub mod info;

pub use info::UserInfoRequest;
