// src/integrations/mod.rs
//
// External Integrations Module

pub mod artic;

pub use artic::ArticClient;
