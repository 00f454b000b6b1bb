// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod fallback;
mod health;
mod profile;

pub use fallback::not_found;
pub use health::health_check;
pub use profile::profile_handler;
