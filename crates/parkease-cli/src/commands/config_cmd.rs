//! Config command handlers: show, path, init.

use parkease_config as config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let text = toml::to_string_pretty(&cfg)
                .map_err(config::ConfigError::Serialization)?;
            output::print_output(text.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init => {
            let path = config::config_path();
            if path.exists() {
                output::print_output(
                    &format!("Config already exists at {}.", path.display()),
                    global.quiet,
                );
                return Ok(());
            }
            let written = config::save_config(&config::Config::default())?;
            output::print_output(
                &format!("Wrote default config to {}.", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
