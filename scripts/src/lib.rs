//! Scripts for deploying, upgrading and configuring the game contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod airnode;
pub mod artifacts;
pub mod cli;
pub mod client;
mod commands;
pub mod constants;
pub mod deployments;
pub mod errors;
pub mod pool;
mod solidity;
#[cfg(test)]
mod test_helpers;
pub mod types;
pub mod utils;
