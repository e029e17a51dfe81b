use crate::commands::{CmdMessage, CmdResult};
use crate::config::YadaConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = YadaConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = YadaConfig::load(dir)?;
            let value = config.get(&key)?;
            Ok(CmdResult::default().with_message(CmdMessage::info(format!("{} = {}", key, value))))
        }
        ConfigAction::Set(key, value) => {
            let mut config = YadaConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            tracing::debug!(key = %key, value = %value, "config updated");

            let display_val = config.get(&key)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            if key != "birthday-window" {
                result.add_message(CmdMessage::info(
                    "The new file name is used from the next start.",
                ));
            }
            Ok(result)
        }
    }
}
