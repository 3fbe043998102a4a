//! Administrator tooling for LaunchKey activation keys.
//!
//! Holds the shared secret and issues keys offline; never shipped with the
//! client. The secret comes from `--secret-hex` or the `LAUNCHKEY_SECRET`
//! environment variable.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use launchkey_crypto::SecretKey;
use launchkey_license::{current_machine_id, KeyService, SECRET_ENV_VAR};

#[derive(Parser)]
#[command(name = "launchkey-admin", about = "LaunchKey license administration tool")]
struct Cli {
    /// Shared secret as a 64-character hex string (overrides LAUNCHKEY_SECRET)
    #[arg(long, global = true)]
    secret_hex: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a fresh 256-bit secret and print it as hex
    Secret,

    /// Issue an activation key for a user on a specific machine
    Generate {
        /// Username to license
        #[arg(long)]
        username: String,
        /// Machine identifier collected from the user's host
        #[arg(long, required_unless_present = "this_machine")]
        machine_id: Option<String>,
        /// Bind to this machine instead of a collected id
        #[arg(long)]
        this_machine: bool,
        /// License validity in days
        #[arg(long, default_value = "30")]
        days: i64,
    },

    /// Validate an activation key against a machine id and print the outcome
    Validate {
        /// The activation key string
        #[arg(long)]
        key: String,
        /// Machine identifier to validate against (defaults to this machine)
        #[arg(long)]
        machine_id: Option<String>,
    },

    /// Print this host's machine identifier
    MachineId,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret => {
            let secret = SecretKey::generate();
            println!("{}", secret.to_hex());
            eprintln!("Store this secret safely; anyone holding it can issue keys.");
        }

        Commands::Generate {
            username,
            machine_id,
            this_machine,
            days,
        } => {
            let service = key_service(cli.secret_hex.as_deref())?;
            let machine_id = resolve_machine_id(machine_id, this_machine)?;
            let key = service
                .generate_key(&username, &machine_id, days)
                .context("key issuance failed")?;
            println!("{key}");
        }

        Commands::Validate { key, machine_id } => {
            let service = key_service(cli.secret_hex.as_deref())?;
            let machine_id = resolve_machine_id(machine_id, true)?;
            let outcome = service.validate_key(&key, &machine_id);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.is_granted() {
                std::process::exit(1);
            }
        }

        Commands::MachineId => match current_machine_id() {
            Some(id) => println!("{id}"),
            None => bail!("no machine identifier available on this host"),
        },
    }

    Ok(())
}

fn key_service(secret_hex: Option<&str>) -> Result<KeyService> {
    match secret_hex {
        Some(hex) => {
            let secret = SecretKey::from_hex(hex).context("invalid --secret-hex")?;
            Ok(KeyService::new(secret))
        }
        None => KeyService::from_env()
            .with_context(|| format!("set {SECRET_ENV_VAR} or pass --secret-hex")),
    }
}

fn resolve_machine_id(explicit: Option<String>, this_machine: bool) -> Result<String> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    if this_machine {
        return current_machine_id()
            .context("no machine identifier available on this host");
    }
    bail!("a machine id is required")
}
