// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod commit;
mod configuration;
mod emoji;

pub use commit::*;
pub use configuration::*;
pub use emoji::*;
