use std::env;
use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use directories::BaseDirs;
use passmeter::{Analyzer, CommonPasswords, Location};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn the_bundled_list_contains_the_classics() -> Result<()> {
    let common = CommonPasswords::bundled();

    for password in &["password", "123456", "qwerty", "abc123", "letmein", "hunter2"] {
        assert!(common.contains(password), "{} is missing", password);
    }
    assert!(common.contains("PASSWORD"));
    assert!(common.contains("QwErTy"));
    assert!(!common.is_empty());
    assert!(common.len() >= 100);

    Ok(())
}

#[test]
fn membership_is_whole_string_only() -> Result<()> {
    let common = CommonPasswords::bundled();

    assert!(!common.contains("passwor"));
    assert!(!common.contains("password "));
    assert!(!common.contains("xpasswordx"));

    Ok(())
}

#[test]
fn the_default_list_is_empty() -> Result<()> {
    let common = CommonPasswords::default();

    assert!(common.is_empty());
    assert_eq!(common.len(), 0);
    assert!(!common.contains("password"));

    Ok(())
}

#[test]
fn collected_words_are_lowercased() -> Result<()> {
    let common = ["HunTer2"].iter().collect::<CommonPasswords>();
    assert_eq!(common.len(), 1);
    assert!(common.contains("hunter2"));
    assert!(common.contains("HUNTER2"));

    let mut common = CommonPasswords::default();
    common.extend(["Alpha", "BETA"].iter());
    assert!(common.contains("alpha"));
    assert!(common.contains("beta"));

    Ok(())
}

#[test]
fn wordlist_files_are_trimmed_and_deduplicated() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"Alpha\n\n  beta  \ngamma\nALPHA\n")?;

    let common = CommonPasswords::from_file(file.path())?;
    assert_eq!(common.len(), 3);
    assert!(common.contains("alpha"));
    assert!(common.contains("beta"));
    assert!(common.contains("gamma"));
    assert_eq!(common.iter().count(), 3);

    Ok(())
}

#[test]
fn missing_wordlist_files_are_reported() -> Result<()> {
    let error = CommonPasswords::from_file("/definitely/missing/wordlist.txt").unwrap_err();
    assert!(error.to_string().contains("/definitely/missing/wordlist.txt"));

    Ok(())
}

#[test]
fn the_automatic_location_prefers_env_then_the_data_dir() -> Result<()> {
    // every variable the automatic lookup reads is redirected or cleared
    // here, and only here, so the other tests can run in parallel
    let home = tempdir()?;
    let original_home = env::var_os("HOME");
    let original_data_home = env::var_os("XDG_DATA_HOME");
    let original_override = env::var_os("PASSMETER_WORDLIST");
    env::set_var("HOME", home.path());
    env::set_var("XDG_DATA_HOME", home.path());
    env::remove_var("PASSMETER_WORDLIST");

    // nothing is set up under the fresh home, so the bundled list applies
    let common = CommonPasswords::open(Location::Automatic)?;
    assert!(common.contains("password"));
    assert!(!common.contains("zzyzx"));

    // a wordlist in the user's data directory takes over
    let wordlist_dir = BaseDirs::new()
        .context("no base directories under the temporary home")?
        .data_dir()
        .join("passmeter");
    fs::create_dir_all(&wordlist_dir)?;
    fs::write(wordlist_dir.join("wordlist.txt"), "zzyzx\n")?;

    let common = CommonPasswords::open(Location::Automatic)?;
    assert_eq!(common.len(), 1);
    assert!(common.contains("zzyzx"));

    // the environment override beats the data directory
    let mut file = NamedTempFile::new()?;
    file.write_all(b"qwerty9000\n")?;
    env::set_var("PASSMETER_WORDLIST", file.path());

    let common = CommonPasswords::open(Location::Automatic)?;
    assert_eq!(common.len(), 1);
    assert!(common.contains("qwerty9000"));
    assert!(!common.contains("zzyzx"));

    match original_override {
        Some(path) => env::set_var("PASSMETER_WORDLIST", path),
        None => env::remove_var("PASSMETER_WORDLIST"),
    }
    match original_data_home {
        Some(path) => env::set_var("XDG_DATA_HOME", path),
        None => env::remove_var("XDG_DATA_HOME"),
    }
    match original_home {
        Some(path) => env::set_var("HOME", path),
        None => env::remove_var("HOME"),
    }

    Ok(())
}

#[test]
fn analyzers_open_wordlist_files() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"zzyzx\n")?;

    let analyzer = Analyzer::open(file.path())?;
    assert!(analyzer.analyze("zzyzx").is_common());
    assert!(!analyzer.analyze("password").is_common());

    let analyzer = Analyzer::open(Location::Bundled)?;
    assert!(analyzer.analyze("password").is_common());

    // the default guessing rate survives open
    assert_eq!(analyzer.analyze("password").crack_time(), "21 seconds");

    Ok(())
}

#[test]
fn debug_output_hides_the_words() -> Result<()> {
    let rendered = format!("{:?}", CommonPasswords::bundled());

    assert!(rendered.contains("entries"));
    assert!(!rendered.contains("qwerty"));

    Ok(())
}
