// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: turning records into something fast to match.
//!
//! The index is built once per locale-filtered record set and never mutated.
//! A locale switch or content update builds a *new* index; anyone still
//! holding the old one keeps reading a consistent snapshot.

mod builder;
mod cache;

pub use builder::*;
pub use cache::*;
