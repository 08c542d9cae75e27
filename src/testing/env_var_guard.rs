use std::ffi::{OsStr, OsString};

/// Sets or removes an environment variable and restores it on drop.
///
/// Tests using it must be `#[serial]`.
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    pub fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}
