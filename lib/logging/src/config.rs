// SPDX-FileCopyrightText: Copyright (c) 2024-2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Environment-driven configuration for the logging module.
//!
//! All switches live under the `CNDR_` prefix so a deployment can tune
//! logging without touching the binary.

/// Name of the variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "CNDR_LOG";

/// Evaluate a subjective configuration value as a boolean.
pub fn is_truthy(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "1" | "true" | "on" | "yes")
}

/// Check if an environment variable is set to a [`is_truthy`] value.
pub fn env_is_truthy(env: &str) -> bool {
    match std::env::var(env) {
        Ok(val) => is_truthy(val.as_str()),
        Err(_) => false,
    }
}

/// Log filter directives for the subscriber.
///
/// Taken from `CNDR_LOG`, falling back to `RUST_LOG`, then to `"info"`.
pub fn log_filter() -> String {
    std::env::var(LOG_FILTER_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string())
}

/// Check whether JSONL logging is enabled.
/// Set the `CNDR_LOGGING_JSONL` environment variable to a [`is_truthy`] value.
pub fn jsonl_logging_enabled() -> bool {
    env_is_truthy("CNDR_LOGGING_JSONL")
}

/// Check whether logging with ANSI terminal escape codes and colors is disabled.
/// Set the `CNDR_DISABLE_ANSI_LOGGING` environment variable to a [`is_truthy`] value.
pub fn disable_ansi_logging() -> bool {
    env_is_truthy("CNDR_DISABLE_ANSI_LOGGING")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy() {
        for val in ["1", "true", "True", "ON", "yes"] {
            assert!(is_truthy(val), "{val} should be truthy");
        }
        for val in ["0", "false", "off", "no", ""] {
            assert!(!is_truthy(val), "{val} should not be truthy");
        }
    }
}
