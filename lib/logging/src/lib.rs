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

//! Logging setup for Conductor binaries and tests.

pub mod config;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filter directives come from [`config::log_filter`] (`CNDR_LOG`, then
/// `RUST_LOG`, then `"info"`). Output format is controlled by the other
/// `CNDR_*` variables documented in [`config`].
pub fn init() {
    let filter = config::log_filter();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_ansi(!config::disable_ansi_logging());

    if config::jsonl_logging_enabled() {
        builder.json().init();
    } else {
        builder.init();
    }
    tracing::debug!(%filter, "logging initialized");
}
