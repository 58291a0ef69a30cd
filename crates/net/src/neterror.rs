// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalizes transport-layer failures to a small, stable code set so
//! equivalent failures compare equal across ticks.

use std::fmt;
use std::io;

/// Normalized transport failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetCode {
    Success,
    ConnTimeout,
    ConnRefused,
    Reset,
    AddrLookup,
    ConnEOF,
    Other,
}

impl fmt::Display for NetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetCode::Success => "success",
            NetCode::ConnTimeout => "connection timeout",
            NetCode::ConnRefused => "connection refused",
            NetCode::Reset => "connection reset",
            NetCode::AddrLookup => "address lookup error",
            NetCode::ConnEOF => "connection eof",
            NetCode::Other => "other",
        };
        f.write_str(s)
    }
}

/// The outcome of one network probe attempt, before classification.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The probe completed without error.
    Ok,
    /// The probe's deadline elapsed before it completed.
    Timeout,
    /// The probe failed with a transport-level I/O error.
    Io(io::Error),
}

/// A classified transport error.
///
/// Equality is defined purely on [`NetCode`] — this is what makes
/// per-endpoint event deduplication cheap and exact. Only the `Other`
/// code retains the original error text, for diagnostic fidelity.
#[derive(Debug, Clone)]
pub struct NetError {
    code: NetCode,
    detail: Option<String>,
}

impl NetCode {
    /// Numeric value used for an endpoint's pre-rendered metric
    /// (`Success` = 0 .. `Other` = 6).
    pub fn as_metric_value(self) -> u8 {
        self as u8
    }
}

impl NetError {
    pub fn code(&self) -> NetCode {
        self.code
    }
}

impl PartialEq for NetError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}
impl Eq for NetError {}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.detail) {
            (NetCode::Other, Some(detail)) => f.write_str(detail),
            _ => write!(f, "{}", self.code),
        }
    }
}

/// Classify a raw I/O error into a [`NetCode`].
///
/// Prefers the portable [`io::ErrorKind`] signal where the standard
/// library exposes one, then falls back to matching the rendered
/// error text the way the original relay monitor did, for the cases
/// (DNS lookup failures in particular) the stdlib doesn't carry a
/// dedicated `ErrorKind` for.
pub fn classify_io_error(err: &io::Error) -> NetCode {
    match err.kind() {
        io::ErrorKind::TimedOut => return NetCode::ConnTimeout,
        io::ErrorKind::ConnectionRefused => return NetCode::ConnRefused,
        io::ErrorKind::ConnectionReset => return NetCode::Reset,
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => return NetCode::ConnEOF,
        _ => {}
    }

    let text = err.to_string();
    let lower = text.to_ascii_lowercase();
    if lower.contains(" lookup ") || lower.contains("failed to lookup") {
        NetCode::AddrLookup
    } else if text.ends_with(": connection refused") {
        NetCode::ConnRefused
    } else if text.ends_with(": connection reset by peer") {
        NetCode::Reset
    } else if text.ends_with(": broken pipe") || text.ends_with("EOF") {
        NetCode::ConnEOF
    } else {
        NetCode::Other
    }
}

/// Reduce a [`ProbeOutcome`] to `Option<NetError>` (`None` means success).
pub fn classify(outcome: ProbeOutcome) -> Option<NetError> {
    match outcome {
        ProbeOutcome::Ok => None,
        ProbeOutcome::Timeout => Some(NetError { code: NetCode::ConnTimeout, detail: None }),
        ProbeOutcome::Io(err) => {
            let code = classify_io_error(&err);
            let detail = match code {
                NetCode::Other => Some(err.to_string()),
                _ => None,
            };
            Some(NetError { code, detail })
        }
    }
}

#[cfg(test)]
#[path = "neterror_tests.rs"]
mod tests;
