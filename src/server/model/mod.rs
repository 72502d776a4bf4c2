pub(crate) mod config;
pub(crate) mod order;
pub(crate) mod user;
