mod configuration;
#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eyre::Report;

use configuration::{Algorithm, Configuration, Verifier};

/// Holds the hex key when neither a key file nor a configuration is given.
const KEY_VARIABLE: &str = "HMAC_PASSWORD_KEY";

fn main() -> Result<ExitCode, Report> {
    let args: Args = Args::parse();

    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match args {
        Args::Hash { key, password, salt } => {
            let verifier = load_verifier(&key)?;
            let password = read_password(&password)?;

            println!("{}", verifier.hash(&password, &salt));
            Ok(ExitCode::SUCCESS)
        }
        Args::Check { key, password, hash, salt } => {
            let verifier = load_verifier(&key)?;
            let password = read_password(&password)?;

            if verifier.check(&password, &hash, &salt) {
                println!("match");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("mismatch");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hmac-password")]
enum Args {
    /// Print the hash of a password.
    Hash {
        #[command(flatten)]
        key: ArgsKey,
        #[command(flatten)]
        password: ArgsPassword,
        #[arg(long = "salt", default_value = "", help = "Appended to the password before hashing")]
        salt: String,
    },

    /// Check a password against a previously printed hash, exits with failure on mismatch.
    Check {
        #[command(flatten)]
        key: ArgsKey,
        #[command(flatten)]
        password: ArgsPassword,
        #[arg(long = "hash")]
        hash: String,
        #[arg(long = "salt", default_value = "", help = "The salt used when hashing")]
        salt: String,
    },
}

#[derive(Parser, Debug)]
pub struct ArgsKey {
    #[arg(short = 'k', long = "key-file", help = "A file containing the validation key as hex")]
    key_file: Option<PathBuf>,
    #[arg(long = "configuration", help = "A JSON configuration with the validation key")]
    configuration: Option<PathBuf>,
    #[arg(long = "algorithm", value_enum)]
    algorithm: Option<Algorithm>,
}

#[derive(Parser, Debug)]
pub struct ArgsPassword {
    #[arg(long = "password")]
    password: Option<String>,
    #[arg(long = "no-password-from-tty", default_value_t = false)]
    not_from_tty: bool,
}

fn load_verifier(args: &ArgsKey) -> Result<Verifier, Report> {
    let (key, algorithm) = resolve_key(args, std::env::var_os(KEY_VARIABLE))?;
    tracing::debug!(?algorithm, "Loading validation key");
    Ok(Verifier::new(algorithm, &key)?)
}

/// Find the key text and algorithm. A key file wins over a configuration, which wins over the
/// environment. `--algorithm` overrides whatever the source said.
fn resolve_key(args: &ArgsKey, from_env: Option<OsString>) -> Result<(String, Algorithm), Report> {
    let (key, algorithm) = if let Some(path) = &args.key_file {
        (fs::read_to_string(path)?, Algorithm::default())
    } else if let Some(path) = &args.configuration {
        let cfg = Configuration::from_str(&fs::read_to_string(path)?)?;
        (cfg.validation_key, cfg.algorithm)
    } else if let Some(key) = from_env {
        let key = key
            .into_string()
            .map_err(|_| Report::msg(format!("`{KEY_VARIABLE}` is not valid UTF-8")))?;
        (key, Algorithm::default())
    } else {
        return Err(Report::msg(format!(
            "No validation key, pass `--key-file` or `--configuration` or set `{KEY_VARIABLE}`"
        )));
    };

    Ok((key, args.algorithm.unwrap_or(algorithm)))
}

fn read_password(args: &ArgsPassword) -> Result<String, Report> {
    match &args.password {
        Some(passwd) => Ok(passwd.clone()),
        None if !args.not_from_tty && passterm::isatty(passterm::Stream::Stdin) => {
            Ok(passterm::prompt_password_stdin(Some("Password: "), passterm::Stream::Stderr)?)
        }
        None => read_password_line(std::io::stdin().lock()),
    }
}

/// Take the first line, without its line ending. An empty input is the empty password.
fn read_password_line(mut input: impl BufRead) -> Result<String, Report> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
