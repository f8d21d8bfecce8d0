use std::ffi::{OsStr, OsString};
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use devgate_config::Config;
use once_cell::sync::Lazy;
use ortho_config::{OrthoConfig, OrthoError};
use tempfile::TempDir;

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
    guard: Option<MutexGuard<'static, ()>>,
}

impl EnvOverride {
    fn set_var(key: &'static str, value: &OsStr) -> Self {
        let guard = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::var_os(key);
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            previous,
            guard: Some(guard),
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
        drop(self.guard.take());
    }
}

fn file_paths(error: &OrthoError) -> Vec<std::path::PathBuf> {
    match error {
        OrthoError::File { path, .. } => vec![path.clone()],
        OrthoError::Aggregate(aggregate) => aggregate.iter().flat_map(file_paths).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn malformed_required_file_is_fatal() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("devgate.toml");
    fs::write(&path, "listen_address = ").expect("write malformed config");

    let args = vec![
        OsString::from("devgated"),
        OsString::from("--config-path"),
        path.clone().into_os_string(),
    ];

    let error = Config::load_from_iter(args).expect_err("loading must fail");
    assert!(
        file_paths(error.as_ref()).contains(&path),
        "expected the malformed file to be named, got {error}"
    );
}

#[test]
fn malformed_configs_are_reported_together() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let cli_path = temp_dir.path().join("cli_devgate.toml");
    let env_path = temp_dir.path().join("env_devgate.toml");

    fs::write(&cli_path, r#"listen_address = "127.0.0.1:1" remote_address"#)
        .expect("write malformed cli config");
    fs::write(&env_path, "event_bus_port = not_a_number").expect("write malformed env config");

    let _env = EnvOverride::set_var("DEVGATE_CONFIG_PATH", env_path.as_os_str());

    let args = vec![
        OsString::from("devgated"),
        OsString::from("--config-path"),
        cli_path.clone().into_os_string(),
    ];

    let error = Config::load_from_iter(args).expect_err("loading must fail");
    let mut mentioned = file_paths(error.as_ref());
    mentioned.sort();
    assert!(
        mentioned.contains(&cli_path),
        "missing CLI path in {mentioned:?}"
    );
    assert!(
        mentioned.contains(&env_path),
        "missing env path in {mentioned:?}"
    );
}

#[test]
fn wrongly_typed_environment_value_is_fatal() {
    let _env = EnvOverride::set_var("DEVGATE_EVENT_BUS_PORT", OsStr::new("not-a-port"));
    let args = vec![OsString::from("devgated")];
    assert!(Config::load_from_iter(args).is_err());
}
