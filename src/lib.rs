// Copyright 2026, The website-operator authors
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod names;
pub mod reconcilers;
pub mod resources;
pub mod types;

#[cfg(test)]
pub mod test_utils;
