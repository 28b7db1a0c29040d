//! Console logging
//!
//! On `wasm32` the macros forward to the browser console through `web_sys`.
//! On native targets they only type-check their arguments, so unit tests never
//! reach a JS import.
//!
//! Usage:
//! ```rust
//! use aabb_sandbox_engine::{engine_log, engine_warn};
//!
//! let bodies = 3;
//! engine_log!("spawned {} bodies", bodies);
//! engine_warn!("unknown body kind: {}", 7);
//! ```

/// Log an informational message to the host console.
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the host console.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}
