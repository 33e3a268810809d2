//! OpenHarmony hilog sink
//!
//! Forwards to `OH_LOG_Print` from `libhilog_ndk.z.so`. The FFI half only
//! exists on `target_env = "ohos"`; the argument mapping is shared so it can
//! be tested on the host.

use std::ffi::CString;
use std::os::raw::c_int;

use super::level::LogLevel;

/// `LOG_APP` from `hilog/log.h`
pub const LOG_APP: c_int = 0;

/// Format passed to `OH_LOG_Print`
///
/// `{public}` keeps the message readable in release builds, where hilog
/// redacts arguments by default.
pub const PUBLIC_STRING_FORMAT: &str = "%{public}s";

/// Map a level onto hilog's `LogLevel` values
pub fn hilog_level(level: LogLevel) -> c_int {
    match level {
        LogLevel::Debug => 3,
        LogLevel::Info => 4,
        LogLevel::Warn => 5,
        LogLevel::Error => 6,
    }
}

/// Convert to a C string, dropping interior NUL bytes
pub fn to_c_string(s: &str) -> CString {
    if s.contains('\0') {
        CString::new(s.replace('\0', "")).unwrap_or_default()
    } else {
        CString::new(s).unwrap_or_default()
    }
}

#[cfg(target_env = "ohos")]
mod ffi {
    use std::os::raw::{c_char, c_int, c_uint};

    #[link(name = "hilog_ndk.z")]
    extern "C" {
        pub fn OH_LOG_Print(
            log_type: c_int,
            level: c_int,
            domain: c_uint,
            tag: *const c_char,
            fmt: *const c_char,
            ...
        ) -> c_int;
    }
}

#[cfg(target_env = "ohos")]
pub use self::platform::HilogSink;

#[cfg(target_env = "ohos")]
mod platform {
    use super::super::domain::Domain;
    use super::super::level::LogLevel;
    use super::super::traits::LogSink;
    use super::{ffi, hilog_level, to_c_string, LOG_APP, PUBLIC_STRING_FORMAT};

    /// Sink backed by the system hilog service
    #[derive(Debug, Clone, Copy, Default)]
    pub struct HilogSink;

    impl HilogSink {
        pub fn new() -> Self {
            Self
        }
    }

    impl LogSink for HilogSink {
        fn name(&self) -> &str {
            "hilog"
        }

        fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel) {
            let tag = to_c_string(component);
            let fmt = to_c_string(PUBLIC_STRING_FORMAT);
            let message = to_c_string(message);
            // SAFETY: all pointers are valid NUL-terminated strings that
            // outlive the call, and the format consumes exactly one `char *`.
            // The return code is ignored: hilog failures are not reported.
            unsafe {
                ffi::OH_LOG_Print(
                    LOG_APP,
                    hilog_level(level),
                    domain.value(),
                    tag.as_ptr(),
                    fmt.as_ptr(),
                    message.as_ptr(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(hilog_level(LogLevel::Debug), 3);
        assert_eq!(hilog_level(LogLevel::Info), 4);
        assert_eq!(hilog_level(LogLevel::Warn), 5);
        assert_eq!(hilog_level(LogLevel::Error), 6);
    }

    #[test]
    fn test_to_c_string_strips_nul() {
        assert_eq!(to_c_string("plain").to_str().unwrap(), "plain");
        assert_eq!(to_c_string("a\0b\0").to_str().unwrap(), "ab");
        assert_eq!(to_c_string("").to_bytes().len(), 0);
    }

    #[test]
    fn test_to_c_string_keeps_utf8() {
        assert_eq!(to_c_string("Übertragung ✓").to_str().unwrap(), "Übertragung ✓");
    }
}
