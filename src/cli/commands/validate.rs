use crate::cli::parser::Commands;
use crate::core::header::{HeaderDecision, HeaderSchema, validate_header};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Validate { file, json } = cmd {
        let path = expand_tilde(file);
        // spreadsheet exports are often Latin-1; only the header text matters
        let bytes = std::fs::read(&path)?;
        let text = String::from_utf8_lossy(&bytes);

        let result = validate_header(&text);

        if *json {
            println!("{}", serde_json::to_string(&HeaderDecision::from(&result))?);
        }

        let schema = result?;
        if !*json {
            let layout = match schema {
                HeaderSchema::Simplified => "simplified",
                HeaderSchema::Detailed => "detailed",
            };
            success(format!("{}: header accepted ({} layout)", path.display(), layout));
        }
    }
    Ok(())
}
