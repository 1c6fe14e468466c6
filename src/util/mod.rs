// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Case folding for matching and the word-character predicate shared by
//! occurrence scanning and highlighting.

pub mod fold;
