use std::collections::HashSet;
use std::env;
use std::fmt;
use std::fs;
use std::iter::FromIterator;
use std::path::{Path, PathBuf};

use custom_debug::Debug;
use directories::BaseDirs;

use crate::{IntoWordlistError, WordlistError};

static BUNDLED: &str = include_str!("data/common_passwords.txt");

#[derive(Debug, Clone)]
pub enum Location {
    /// $PASSMETER_WORDLIST or if not set ~/.local/share/passmeter/wordlist.txt,
    /// with the bundled list as fallback
    Automatic,
    /// The list compiled into this crate
    Bundled,
    /// Override the path
    Manual(PathBuf),
}

impl<P> From<P> for Location
where
    P: Into<PathBuf>,
{
    fn from(path: P) -> Location {
        Location::Manual(path.into())
    }
}

fn debug_words(words: &HashSet<String>, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} entries", words.len())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonPasswords {
    #[debug(with = "debug_words")]
    words: HashSet<String>,
}

impl CommonPasswords {
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    pub fn open<L>(location: L) -> Result<Self, WordlistError>
    where
        L: Into<Location>,
    {
        match location.into() {
            Location::Bundled => Ok(Self::bundled()),
            Location::Manual(path) => Self::from_file(path),
            Location::Automatic => {
                if let Ok(path) = env::var("PASSMETER_WORDLIST") {
                    return Self::from_file(path);
                }
                if let Some(base_dirs) = BaseDirs::new() {
                    let path = base_dirs.data_dir().join("passmeter").join("wordlist.txt");
                    if path.is_file() {
                        return Self::from_file(path);
                    }
                }
                Ok(Self::bundled())
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_wordlist_error(path.display().to_string())?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect()
    }

    // the whole password has to match, substrings of listed words do not count
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<W: AsRef<str>> FromIterator<W> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        CommonPasswords { words }
    }
}

impl<W: AsRef<str>> Extend<W> for CommonPasswords {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|word| word.as_ref().to_lowercase()));
    }
}
