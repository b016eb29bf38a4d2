//! Show the effective configuration

use std::path::Path;

use codesift::config::Config;
use codesift::output::OutputMode;
use codesift::paths;

/// Print the loaded configuration with secrets masked
pub fn show_config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path)?.redacted();

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputMode::Human => {
            let source = config_path.map_or_else(paths::global_config, Path::to_path_buf);
            println!("# {}", source.display());
            print!("{}", config.to_toml()?);
        },
    }
    Ok(())
}
