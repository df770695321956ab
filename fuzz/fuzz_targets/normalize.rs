// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization and tokenization.
//!
//! Arbitrary Unicode goes in. What comes out must be alphanumeric, unchanged by
//! lowercasing, stable under a second pass, and never empty when wrapped in a
//! `Term`. Uppercase letters with no lowercase mapping (U+03D2 'ϒ') pass
//! through as they are.

#![no_main]

use libfuzzer_sys::fuzz_target;
use minidex::{normalize, tokenize};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let once = normalize(&text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&once), once, "normalize is not idempotent");

    // INVARIANT 2: only alphanumeric, and a fixed point of lowercasing
    assert!(once.chars().all(char::is_alphanumeric), "non-alphanumeric output: {:?}", once);
    assert!(
        once.chars().flat_map(char::to_lowercase).eq(once.chars()),
        "output changes under lowercasing: {:?}",
        once
    );

    // INVARIANT 3: tokens are non-empty and already normalized
    for term in tokenize(&text) {
        assert!(!term.as_str().is_empty());
        assert_eq!(normalize(term.as_str()), term.as_str());
    }
});
