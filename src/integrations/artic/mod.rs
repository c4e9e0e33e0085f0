pub mod client;

pub use client::ArticClient;
