// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! One implementation here: approximate *substring* matching, where the
//! pattern may start anywhere in the text for free and only the edits needed
//! to align it count against the score.

mod approx;

pub use approx::*;
