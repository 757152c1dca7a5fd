// src/core/mod.rs

pub mod patterns;
pub mod sanitize;
