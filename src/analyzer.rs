use crate::{
    crack_time, entropy, has_alphabet_run, has_number_run, has_repeated_char, Analysis,
    CharCounts, CommonPasswords, Location, Recommendation, Strength, WordlistError,
    CRACK_SPEED_PER_SECOND,
};

#[derive(Debug, Clone)]
pub struct Analyzer {
    common: CommonPasswords,
    crack_speed: f64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            common: CommonPasswords::bundled(),
            crack_speed: CRACK_SPEED_PER_SECOND,
        }
    }
}

impl Analyzer {
    pub fn open<L>(wordlist: L) -> Result<Self, WordlistError>
    where
        L: Into<Location>,
    {
        Ok(Self {
            common: CommonPasswords::open(wordlist)?,
            crack_speed: CRACK_SPEED_PER_SECOND,
        })
    }

    pub fn common_passwords<C>(self, common: C) -> Self
    where
        C: Into<CommonPasswords>,
    {
        Self {
            common: common.into(),
            ..self
        }
    }

    pub fn crack_speed(self, guesses_per_second: f64) -> Self {
        Self {
            crack_speed: guesses_per_second,
            ..self
        }
    }

    pub fn analyze(&self, password: &str) -> Analysis {
        let len = password.chars().count();
        let is_common = self.common.contains(password);
        let counts = CharCounts::of(password);
        let mut recommendations = Vec::new();

        // base score grows with length
        let mut score = 4 * len as i64;
        if len < 8 {
            recommendations.push(Recommendation::IncreaseLength);
        }
        if len > 16 {
            score += 10;
        }

        // one bonus per character class in use
        if counts.upper > 0 {
            score += 5;
        } else {
            recommendations.push(Recommendation::AddUppercase);
        }
        if counts.lower > 0 {
            score += 5;
        } else {
            recommendations.push(Recommendation::AddLowercase);
        }
        if counts.digits > 0 {
            score += 5;
        } else {
            recommendations.push(Recommendation::AddNumbers);
        }
        if counts.special > 0 {
            score += 5;
        } else {
            recommendations.push(Recommendation::AddSpecialCharacters);
        }

        // three classes earn another 10, all four 20
        let variety = counts.variety();
        if variety >= 3 {
            score += 10;
        }
        if variety == 4 {
            score += 10;
        }

        if has_alphabet_run(password) {
            score -= 15;
            recommendations.push(Recommendation::AlphabetSequence);
        }
        if has_number_run(password) {
            score -= 15;
            recommendations.push(Recommendation::NumberSequence);
        }
        if has_repeated_char(password) {
            score -= 10;
            recommendations.push(Recommendation::RepeatedCharacters);
        }

        // common passwords are capped at 20 and their warning goes first
        if is_common {
            score = score.min(20);
            recommendations.insert(0, Recommendation::VeryCommon);
        }

        let score = score.max(0).min(100) as u8;
        let strength = Strength::from_score(score);
        let entropy = entropy(password);
        let crack_time = crack_time(entropy, self.crack_speed);

        Analysis::new(
            score,
            strength,
            entropy,
            crack_time,
            recommendations,
            counts,
            is_common,
        )
    }
}

pub fn analyze(password: &str) -> Analysis {
    Analyzer::default().analyze(password)
}
