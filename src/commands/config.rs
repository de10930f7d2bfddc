//! `graphic config` - show or update the global configuration

use graphic_core::config::GlobalConfig;
use graphic_core::error::Result;
use serde_json::json;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::records::quoted;

/// Values given on the command line; `None` leaves a setting alone
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub default_weight: Option<i64>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.default_weight.is_none() && self.format.is_none() && self.log_level.is_none()
    }

    /// Apply to `config`, returning whether anything was set
    pub fn apply_to(&self, config: &mut GlobalConfig) -> bool {
        if let Some(weight) = self.default_weight {
            config.default_weight = weight;
        }
        if let Some(format) = self.format {
            config.format = Some(format);
        }
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
        !self.is_empty()
    }
}

pub fn execute(ctx: &CommandContext, update: ConfigUpdate) -> Result<()> {
    let path = GlobalConfig::config_path()?;
    let mut config = ctx.config.clone();
    if update.apply_to(&mut config) {
        config.save()?;
        info!(path = %path.display(), "config saved");
    }

    match ctx.format {
        OutputFormat::Human => {
            println!("config: {}", GlobalConfig::source_display());
            println!(
                "format = {}",
                config
                    .format
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "(unset)".to_string())
            );
            println!("default_weight = {}", config.default_weight);
            println!(
                "log_level = {}",
                config.log_level.as_deref().unwrap_or("(unset)")
            );
        }
        OutputFormat::Json => {
            let value = json!({
                "path": path.display().to_string(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphic=1 records=1 mode=config path={}",
                quoted(&path.display().to_string())
            );
            if let Some(format) = config.format {
                println!("C format={format}");
            }
            println!("C default_weight={}", config.default_weight);
            if let Some(level) = &config.log_level {
                println!("C log_level={}", quoted(level));
            }
        }
    }
    Ok(())
}
