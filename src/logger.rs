use anyhow::{anyhow, Result};
use log::Level;
use simple_logger::init_with_level;
use std::{env, str::FromStr};

const LOG_LEVEL_ENV: &str = "REPOSCANNER_LOG";

pub fn init() -> Result<()> {
    let level = level_from(env::var(LOG_LEVEL_ENV).ok().as_deref())?;
    init_with_level(level)?;

    Ok(())
}

fn level_from(value: Option<&str>) -> Result<Level> {
    match value {
        Some(value) if !value.trim().is_empty() => Level::from_str(value.trim())
            .map_err(|_| anyhow!("Invalid {} value: {}", LOG_LEVEL_ENV, value)),
        _ => Ok(Level::Info),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_info() {
        assert_eq!(level_from(None).unwrap(), Level::Info);
        assert_eq!(level_from(Some("  ")).unwrap(), Level::Info);
    }

    #[test]
    fn should_parse_level_case_insensitively() {
        assert_eq!(level_from(Some("debug")).unwrap(), Level::Debug);
        assert_eq!(level_from(Some("WARN")).unwrap(), Level::Warn);
    }

    #[test]
    fn should_reject_unknown_level() {
        assert!(level_from(Some("loud")).is_err());
    }
}
