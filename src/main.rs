//! rclone-crypt: encrypt or decrypt one file into/from an rclone crypt container.
//!
//! ```text
//! rclone-crypt <encrypt|decrypt|c|d> <INPUT> <OUTPUT> <PASSWORD> [SALT]
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`); use
//! `RUST_LOG=rclone_crypt=debug` to see the header nonce and block totals.

use clap::{Parser, ValueEnum};
use rclone_crypt::aliases::PasswordString;
use rclone_crypt::{decrypt_file, encrypt_file, CryptError, ScryptBuilder};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Plaintext file → container
    #[value(alias = "c")]
    Encrypt,
    /// Container → plaintext file
    #[value(alias = "d")]
    Decrypt,
}

#[derive(Parser)]
#[command(name = "rclone-crypt", version, about)]
struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    mode: Mode,

    /// File to read
    input: PathBuf,

    /// File to create (truncated if it exists)
    output: PathBuf,

    /// Password; an empty string selects the all-zero test key
    password: String,

    /// scrypt salt; the built-in default salt is used when omitted
    salt: Option<String>,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("mode", &self.mode)
            .field("input", &self.input)
            .field("output", &self.output)
            .field("password", &"[REDACTED]")
            .field("salt", &self.salt)
            .finish()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CryptError> {
    let password = PasswordString::new(cli.password);
    let builder = ScryptBuilder::new().with_salt(cli.salt.as_deref().unwrap_or_default());
    if builder.uses_default_salt() {
        warn!("no salt given, falling back to the built-in default salt");
    }
    if password.expose_secret().is_empty() {
        warn!("empty password: using the all-zero key, output is NOT protected");
    }

    let key = builder.derive(password.expose_secret().as_bytes())?;
    drop(password);

    let start = Instant::now();
    match cli.mode {
        Mode::Encrypt => encrypt_file(&cli.input, &cli.output, &key)?,
        Mode::Decrypt => decrypt_file(&cli.input, &cli.output, &key)?,
    }
    info!(
        mode = ?cli.mode,
        input = %cli.input.display(),
        output = %cli.output.display(),
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let cli = Cli::parse_from(["rclone-crypt", "c", "in", "out", "hunter2", "pepper"]);
        let shown = format!("{cli:?}");
        assert!(!shown.contains("hunter2"), "{shown}");
        assert!(shown.contains("pepper"));
        assert_eq!(cli.mode, Mode::Encrypt);
    }
}
