// Acquisition collaborators that fetch raw stats documents from the upstream provider.

pub use client::R6DataClient;

mod client;
