// src/handlers/mod.rs

pub mod analysis;
