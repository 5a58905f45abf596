pub mod handlers;
pub mod log;
pub mod processor;
pub mod validate;
