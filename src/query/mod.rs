// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing and per-value matching.
//!
//! A query becomes a [`ParsedQuery`]: OR-groups of AND-ed tokens, each token
//! carrying an operator. Matching one folded field value against the parsed
//! query yields a score and the character spans to highlight.

mod matcher;
mod parse;

pub use matcher::*;
pub use parse::*;
