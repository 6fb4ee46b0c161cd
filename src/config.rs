use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning, see `Settings`).

pub fn log_path() -> PathBuf {
    env::var_os("ALIEN_INVASION_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("alien_invasion.log"))
}

pub fn tick_interval() -> Duration {
    let millis = env::var("ALIEN_INVASION_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(16)
        .clamp(1, 1000);
    Duration::from_millis(millis)
}
