use std::io::Write as _;

use super::configuration::{Algorithm, Configuration, Verifier};
use super::{read_password_line, resolve_key, ArgsKey};

const VALIDATION_KEY: &str = "C7D461D13B86BED2A574C1E57A90DCD613690FA72CF3C9ED37C182222C417C22D886B7620921A3C730626F6BA42637F8B9D974040DB73BFA9CF8D30A14852581";

fn no_key() -> ArgsKey {
    ArgsKey {
        key_file: None,
        configuration: None,
        algorithm: None,
    }
}

#[test]
fn parse_configuration() -> Result<(), eyre::Report> {
    let configuration = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/configuration.json");
    let cfg = Configuration::from_str(&std::fs::read_to_string(configuration)?)?;

    assert_eq!(cfg.validation_key, VALIDATION_KEY);
    assert_eq!(cfg.algorithm, Algorithm::Sha1);

    let configuration = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/configuration-sha256.json");
    let cfg = Configuration::from_str(&std::fs::read_to_string(configuration)?)?;
    assert_eq!(cfg.algorithm, Algorithm::Sha256);

    Ok(())
}

#[test]
fn reject_configuration() {
    assert!(Configuration::from_str("{}").is_err());
    assert!(Configuration::from_str(r#"{ "validation_key": "00", "algorithm": "md5" }"#).is_err());
    assert!(Configuration::from_str("validation_key = 00").is_err());
}

#[test]
fn key_from_environment() {
    let (key, algorithm) = resolve_key(&no_key(), Some(VALIDATION_KEY.into())).unwrap();
    assert_eq!(key, VALIDATION_KEY);
    assert_eq!(algorithm, Algorithm::Sha1);

    assert!(resolve_key(&no_key(), None).is_err());
}

#[test]
fn key_file_wins() -> Result<(), eyre::Report> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "{VALIDATION_KEY}")?;

    let args = ArgsKey {
        key_file: Some(file.path().to_path_buf()),
        configuration: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/configuration-sha256.json").into()),
        algorithm: None,
    };

    let (key, algorithm) = resolve_key(&args, Some("00".into()))?;
    assert_eq!(key.trim(), VALIDATION_KEY);
    assert_eq!(algorithm, Algorithm::Sha1);

    // The trailing newline of the file does not matter.
    let verifier = Verifier::new(algorithm, &key)?;
    let plain = Verifier::new(Algorithm::Sha1, VALIDATION_KEY)?;
    assert_eq!(verifier.hash("password", ""), plain.hash("password", ""));

    Ok(())
}

#[test]
fn algorithm_override() -> Result<(), eyre::Report> {
    let args = ArgsKey {
        key_file: None,
        configuration: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/configuration-sha256.json").into()),
        algorithm: Some(Algorithm::Sha1),
    };

    let (_, algorithm) = resolve_key(&args, None)?;
    assert_eq!(algorithm, Algorithm::Sha1);

    Ok(())
}

#[test]
fn missing_key_file() {
    let args = ArgsKey {
        key_file: Some("/nonexistent/hmac-password.key".into()),
        configuration: None,
        algorithm: None,
    };

    assert!(resolve_key(&args, Some(VALIDATION_KEY.into())).is_err());
}

#[test]
fn verifier_per_algorithm() -> Result<(), eyre::Report> {
    for (algorithm, len) in [(Algorithm::Sha1, 28), (Algorithm::Sha256, 44)] {
        let verifier = Verifier::new(algorithm, VALIDATION_KEY)?;
        let hash = verifier.hash("password", "magic");

        assert_eq!(hash.len(), len);
        assert!(verifier.check("password", &hash, "magic"));
        assert!(!verifier.check("password", &hash, ""));
    }

    assert!(Verifier::new(Algorithm::Sha1, "").is_err());
    Ok(())
}

#[test]
fn password_lines() -> Result<(), eyre::Report> {
    assert_eq!(read_password_line(&b"password\n"[..])?, "password");
    assert_eq!(read_password_line(&b"password\r\n"[..])?, "password");
    assert_eq!(read_password_line(&b"password"[..])?, "password");
    assert_eq!(read_password_line(&b"first\nsecond\n"[..])?, "first");
    assert_eq!(read_password_line(&b" spaced \n"[..])?, " spaced ");
    assert_eq!(read_password_line(&b""[..])?, "");
    Ok(())
}
