// SPDX-License-Identifier: MIT OR Apache-2.0

//! Well-known addresses and `rstest` fixtures for tests and bootstrapping.
pub mod constants;
pub mod fixtures;
