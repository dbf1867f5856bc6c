use clap::Subcommand;
use habitrack_core::advisor::keyring_store;
use habitrack_core::{Config, GeminiAdvisor};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Gemini: login / logout / status
    Gemini {
        #[command(subcommand)]
        action: AuthOp,
    },
}

#[derive(Subcommand)]
pub enum AuthOp {
    /// Store the API key in the OS keyring
    Login {
        #[arg(long)]
        api_key: String,
    },
    /// Remove the stored API key
    Logout,
    /// Check whether an API key is available
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let AuthAction::Gemini { action: op } = action;
    match op {
        AuthOp::Login { api_key } => {
            keyring_store::set("gemini_api_key", &api_key)?;
            println!("Gemini API key stored");
        }
        AuthOp::Logout => {
            keyring_store::delete("gemini_api_key")?;
            println!("Gemini API key removed");
        }
        AuthOp::Status => {
            let config = Config::load_or_default();
            let advisor = GeminiAdvisor::new(&config.advisor);
            println!(
                "{}",
                if advisor.is_configured() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
    }
    Ok(())
}
