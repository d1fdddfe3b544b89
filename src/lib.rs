pub mod commands;
pub mod config;
pub mod model;
pub mod present;
pub mod remote;
pub mod session;
