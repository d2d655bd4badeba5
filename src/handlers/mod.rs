// src/handlers/mod.rs

pub mod auth;
pub mod content;
pub mod results;
