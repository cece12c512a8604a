//! Process-environment isolation for `SYSTEMHOOK_*` tests.
//!
//! The environment is shared by every test thread. Hold [`ENV_LOCK`] for as
//! long as any [`EnvVarGuard`] is alive.

use std::env;
use std::sync::Mutex;

pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Temporarily sets or clears one variable; the previous value comes back on drop.
///
/// ```ignore
/// let _lock = ENV_LOCK.lock().unwrap();
/// let _arch = EnvVarGuard::set(ENV_OS_ARCH, "sparcv9");
/// ```
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub fn remove(key: &'static str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        write_var(key, value);
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(self.key, self.previous.as_deref());
    }
}

#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold ENV_LOCK, so no other test thread touches the
    // environment concurrently.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "SYSTEMHOOK_TEST_UTILS_SCRATCH";

    #[test]
    fn guard_restores_previous_value() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _outer = EnvVarGuard::set(KEY, "outer");
        {
            let _inner = EnvVarGuard::remove(KEY);
            assert!(env::var(KEY).is_err());
        }
        assert_eq!(env::var(KEY).unwrap(), "outer");
    }
}
