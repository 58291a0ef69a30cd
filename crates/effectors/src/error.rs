// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectorError {
    #[error("command timeout")]
    Timeout,
    #[error("command exit with {code}:\n{output}")]
    ExitCode { code: i32, output: String },
    #[error("command execute error with {0}")]
    Spawn(#[from] std::io::Error),
}
