use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    VeryCommon,
    IncreaseLength,
    AddUppercase,
    AddLowercase,
    AddNumbers,
    AddSpecialCharacters,
    AlphabetSequence,
    NumberSequence,
    RepeatedCharacters,
}

impl Recommendation {
    pub fn is_critical(&self) -> bool {
        if let Recommendation::VeryCommon = self {
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Recommendation::VeryCommon => {
                write!(f, "CRITICAL: This is a very common password.")
            }
            Recommendation::IncreaseLength => {
                write!(f, "Increase length to at least 8 characters.")
            }
            Recommendation::AddUppercase => write!(f, "Add uppercase letters."),
            Recommendation::AddLowercase => write!(f, "Add lowercase letters."),
            Recommendation::AddNumbers => write!(f, "Add numbers."),
            Recommendation::AddSpecialCharacters => {
                write!(f, "Add special characters (e.g., !@#$).")
            }
            Recommendation::AlphabetSequence => {
                write!(f, "Avoid alphabet sequences like 'abc'.")
            }
            Recommendation::NumberSequence => {
                write!(f, "Avoid number sequences like '123'.")
            }
            Recommendation::RepeatedCharacters => {
                write!(f, "Avoid repeating characters like 'aaa'.")
            }
        }
    }
}
