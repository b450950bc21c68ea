use crate::api::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, info, success};
use std::path::Path;

/// Token lifecycle: set on login, cleared on logout, persisted in the config file.
pub fn handle(cmd: &Commands, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Session {
        login,
        logout,
        status,
    } = cmd
    {
        let mut session = Session::from_config(cfg);

        if let Some(token) = login {
            session.login(token)?;
            persist(&session, cfg, cfg_path)?;
            success("Logged in.");
        } else if *logout {
            session.logout();
            persist(&session, cfg, cfg_path)?;
            success("Logged out.");
        }

        if *status || (login.is_none() && !*logout) {
            match session.masked() {
                Some(masked) => {
                    field("Backend", &cfg.backend_url);
                    field("Token", masked);
                }
                None => info("Not logged in."),
            }
        }
    }
    Ok(())
}

fn persist(session: &Session, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    let mut updated = cfg.clone();
    session.store(&mut updated);
    updated.save_to(cfg_path)?;
    tracing::debug!(
        path = %cfg_path.display(),
        authenticated = session.is_authenticated(),
        "session saved"
    );
    Ok(())
}
