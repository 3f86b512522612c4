use crate::commands::{CmdMessage, CmdResult};
use crate::config::{DatabaseSettings, RoloConfig};
use crate::error::{Result, RoloError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Changes are written to `dir` and take effect in the next session.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RoloConfig::load(dir)?;
            Ok(CmdResult::default()
                .with_config(config)
                .with_database(DatabaseSettings::from_env()))
        }
        ConfigAction::ShowKey(key) => {
            let config = RoloConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RoloConfig::load(dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(RoloError::Config(e)) => {
                    let mut res = CmdResult::default();
                    res.add_message(CmdMessage::error(e));
                    return Ok(res);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {} (applies to new sessions)",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_includes_database_settings() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), RoloConfig::default());
        assert!(result.database.is_some());
    }

    #[test]
    fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("title".into(), "Friends".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(RoloConfig::load(dir.path()).unwrap().title, "Friends");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("history-depth".into(), "deep".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("history-depth".into())).unwrap();
        assert_eq!(result.messages[0].content, "100");

        let result = run(dir.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
