//! Interfaces layer - how the outside world reaches the service

pub mod http;
