//! Bearer-token session.
//!
//! The session is an explicit value: it is built from the config, handed to
//! whatever needs it, and written back through `Config::save` when it changes.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            token: cfg.token.clone().filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn login(&mut self, token: &str) -> AppResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Config("token must not be empty".to_string()));
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value of the `Authorization` header for backend calls.
    pub fn authorization_header(&self) -> AppResult<String> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {t}"))
            .ok_or(AppError::NotAuthenticated)
    }

    /// Token with all but the last four characters hidden.
    pub fn masked(&self) -> Option<String> {
        self.token.as_ref().map(|t| {
            let chars: Vec<char> = t.chars().collect();
            let keep = chars.len().min(4);
            let tail: String = chars[chars.len() - keep..].iter().collect();
            format!("{}{}", "*".repeat(chars.len() - keep), tail)
        })
    }

    /// Copy the session state into `cfg` so it can be saved.
    pub fn store(&self, cfg: &mut Config) {
        cfg.token = self.token.clone();
    }
}
