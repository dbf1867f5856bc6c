use clap::Subcommand;
use habitrack_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Read a value by dot-separated key (e.g. advisor.model)
    Get { key: String },
    /// Set a value by dot-separated key and persist
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown configuration key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
