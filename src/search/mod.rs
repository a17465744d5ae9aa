// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Parse the query, match it against every indexed value, fold the per-value
//! scores into one score per record, sort, cap. Lower scores are better and
//! equal scores keep index order, so the same query over the same index always
//! returns the same list.

mod engine;
pub mod ranking;
pub mod utils;

pub use engine::*;
