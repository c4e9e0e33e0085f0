// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod selection_service;


pub use selection_service::{SelectionService, TableSnapshot};
