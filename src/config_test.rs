use super::*;

/// # Safety
/// Env mutation races with other threads; only this module touches these
/// keys, and its tests hold `ENV_LOCK`.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var("TASKDECK_API_URL");
        std::env::remove_var("TASKDECK_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("TASKDECK_CONNECT_TIMEOUT_SECS");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_env() };

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_env();
        std::env::set_var("TASKDECK_API_URL", "https://todo.example.test/api/");
        std::env::set_var("TASKDECK_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("TASKDECK_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.api_url, "https://todo.example.test/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_env() };
}

#[test]
fn from_env_ignores_bad_timeouts() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_env();
        std::env::set_var("TASKDECK_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_env() };
}

#[test]
fn url_joins_base_and_path() {
    let cfg = ClientConfig::default().with_api_url("http://localhost:8080/");
    assert_eq!(cfg.url("/lists/1/tasks"), "http://localhost:8080/lists/1/tasks");
}
