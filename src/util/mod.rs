// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text folding for case- and accent-insensitive matching, and the token
//! counting behind the field-length norm.

pub mod normalize;
