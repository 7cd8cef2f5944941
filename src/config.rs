// src/config.rs

use std::env;
use std::net::SocketAddr;
use dotenvy::dotenv;

use crate::analysis::HardAccuracyPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_dir: String,
    pub rust_log: String,
    pub hard_accuracy_policy: HardAccuracyPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let addr = env::var("APP_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("APP_ADDR must be a socket address, e.g. 0.0.0.0:3000");

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let hard_accuracy_policy = env::var("HARD_ACCURACY_POLICY")
            .map(|v| v.parse().expect("HARD_ACCURACY_POLICY must be 'leading_positions' or 'difficulty_match'"))
            .unwrap_or_default();

        Self {
            addr,
            log_dir,
            rust_log,
            hard_accuracy_policy,
        }
    }
}
