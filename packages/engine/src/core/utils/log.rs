//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. On native targets (unit and
//! integration tests) they only type-check their arguments, since calling a JS
//! import outside the browser aborts.
//!
//! Usage:
//! ```rust
//! use letterfall_engine::console_log;
//!
//! let live = 3;
//! console_log!("live particles: {}", live);
//! ```

/// Log an informational line to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}
