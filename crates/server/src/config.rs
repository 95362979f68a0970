use std::{collections::HashMap, fs, time::Duration};

use serde::Deserialize;
use server_api::FlowPacing;
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub registration_delay_ms: u64,
    pub auth_delay_ms: u64,
    pub payment_delay_ms: u64,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            registration_delay_ms: 2000,
            auth_delay_ms: 1500,
            payment_delay_ms: 2000,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl Settings {
    pub fn pacing(&self) -> FlowPacing {
        FlowPacing {
            institute_registration: Duration::from_millis(self.registration_delay_ms),
            auth: Duration::from_millis(self.auth_delay_ms),
            payment: Duration::from_millis(self.payment_delay_ms),
        }
    }
}

/// Defaults, then `server.toml`, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match toml::from_str::<toml::Table>(&raw) {
            Ok(table) => apply_file_overrides(&mut settings, &flatten(table)),
            Err(error) => warn!(file = SETTINGS_FILE, %error, "ignoring unreadable settings file"),
        }
    }

    let env: HashMap<String, String> = std::env::vars().collect();
    apply_env_overrides(&mut settings, &env);
    settings
}

/// Flat `key = value` pairs; non-string scalars keep their TOML spelling.
pub(crate) fn flatten(table: toml::Table) -> HashMap<String, String> {
    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect()
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("registration_delay_ms") {
        set_parsed(&mut settings.registration_delay_ms, "registration_delay_ms", v);
    }
    if let Some(v) = file_cfg.get("auth_delay_ms") {
        set_parsed(&mut settings.auth_delay_ms, "auth_delay_ms", v);
    }
    if let Some(v) = file_cfg.get("payment_delay_ms") {
        set_parsed(&mut settings.payment_delay_ms, "payment_delay_ms", v);
    }
    if let Some(v) = file_cfg.get("max_body_bytes") {
        set_parsed(&mut settings.max_body_bytes, "max_body_bytes", v);
    }
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, env: &HashMap<String, String>) {
    if let Some(v) = env.get("SERVER_BIND") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = env.get("APP__BIND_ADDR") {
        settings.server_bind = v.clone();
    }

    // One knob for every simulated wait; the specific ones below win.
    if let Some(v) = env.get("APP__SIMULATED_DELAY_MS") {
        let mut delay = settings.payment_delay_ms;
        set_parsed(&mut delay, "APP__SIMULATED_DELAY_MS", v);
        settings.registration_delay_ms = delay;
        settings.auth_delay_ms = delay;
        settings.payment_delay_ms = delay;
    }
    if let Some(v) = env.get("APP__REGISTRATION_DELAY_MS") {
        set_parsed(
            &mut settings.registration_delay_ms,
            "APP__REGISTRATION_DELAY_MS",
            v,
        );
    }
    if let Some(v) = env.get("APP__AUTH_DELAY_MS") {
        set_parsed(&mut settings.auth_delay_ms, "APP__AUTH_DELAY_MS", v);
    }
    if let Some(v) = env.get("APP__PAYMENT_DELAY_MS") {
        set_parsed(&mut settings.payment_delay_ms, "APP__PAYMENT_DELAY_MS", v);
    }
    if let Some(v) = env.get("APP__MAX_BODY_BYTES") {
        set_parsed(&mut settings.max_body_bytes, "APP__MAX_BODY_BYTES", v);
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, key: &str, raw: &str) {
    match raw.trim().parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => warn!(%key, value = %raw, "ignoring non-numeric setting"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
