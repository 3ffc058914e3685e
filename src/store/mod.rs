pub mod client;

pub use client::Store;
