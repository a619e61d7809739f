use anyhow::Result;
use starid_core::config::SolverConfig;

/// Print the default SolverConfig as TOML to stdout.
pub fn run() -> Result<()> {
    let config = SolverConfig::default();
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}
