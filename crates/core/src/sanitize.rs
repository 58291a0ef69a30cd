// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metric-path name sanitizer.

/// Maps an arbitrary string to a safe metric-path atom.
///
/// Runs of characters outside `[A-Za-z0-9_-]` collapse to a single `_`.
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
