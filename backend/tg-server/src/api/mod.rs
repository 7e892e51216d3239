pub mod error;
pub mod extractors;
pub mod login;
pub mod logout;
pub mod me;
