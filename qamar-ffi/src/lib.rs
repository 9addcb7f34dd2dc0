// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **qamar**.
//!
//! A flat C-compatible API over the prayer-time engine, the Qibla bearing
//! and the tajweed annotator. Every fallible call returns a [`QamarStatus`]
//! and writes its result through an out-pointer; no panic crosses the
//! boundary.

mod error;
mod prayer;
mod qibla;
mod tajweed;

pub use error::*;
pub use prayer::*;
pub use qibla::*;
pub use tajweed::*;

/// Run `$body`, turning a panic into `$on_panic`.
#[macro_export]
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $on_panic,
        }
    };
}

/// Returns the qamar-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn qamar_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
