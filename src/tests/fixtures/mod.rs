pub mod commands;
pub mod http;
pub mod registry;
