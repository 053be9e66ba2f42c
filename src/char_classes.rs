use bitflags::bitflags;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGITS_POOL: u32 = 10;
// 32 printable ascii symbols, kept fixed so entropy estimates stay reproducible
const SPECIAL_POOL: u32 = 32;

bitflags! {
    pub struct CharClasses: u8 {
        const LOWERCASE = 0b00000001;
        const UPPERCASE = 0b00000010;
        const DIGITS = 0b00000100;
        const SPECIAL = 0b00001000;
    }
}

impl CharClasses {
    pub fn classify(c: char) -> CharClasses {
        if c.is_ascii_lowercase() {
            CharClasses::LOWERCASE
        } else if c.is_ascii_uppercase() {
            CharClasses::UPPERCASE
        } else if c.is_ascii_digit() {
            CharClasses::DIGITS
        } else {
            // whitespace and non-ascii text end up here as well
            CharClasses::SPECIAL
        }
    }

    pub fn of(password: &str) -> CharClasses {
        password
            .chars()
            .fold(CharClasses::empty(), |classes, c| {
                classes | CharClasses::classify(c)
            })
    }

    pub fn pool_size(&self) -> u32 {
        let mut size = 0;
        if self.contains(CharClasses::LOWERCASE) {
            size += LOWERCASE_POOL;
        }
        if self.contains(CharClasses::UPPERCASE) {
            size += UPPERCASE_POOL;
        }
        if self.contains(CharClasses::DIGITS) {
            size += DIGITS_POOL;
        }
        if self.contains(CharClasses::SPECIAL) {
            size += SPECIAL_POOL;
        }
        size
    }

    pub fn variety(&self) -> usize {
        self.bits().count_ones() as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharCounts {
    pub upper: usize,
    pub lower: usize,
    pub digits: usize,
    pub special: usize,
}

impl CharCounts {
    pub fn of(password: &str) -> Self {
        let mut counts = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                counts.lower += 1;
            } else if c.is_ascii_uppercase() {
                counts.upper += 1;
            } else if c.is_ascii_digit() {
                counts.digits += 1;
            } else {
                counts.special += 1;
            }
        }
        counts
    }

    pub fn classes(&self) -> CharClasses {
        let mut classes = CharClasses::empty();
        if self.lower > 0 {
            classes |= CharClasses::LOWERCASE;
        }
        if self.upper > 0 {
            classes |= CharClasses::UPPERCASE;
        }
        if self.digits > 0 {
            classes |= CharClasses::DIGITS;
        }
        if self.special > 0 {
            classes |= CharClasses::SPECIAL;
        }
        classes
    }

    pub fn variety(&self) -> usize {
        self.classes().variety()
    }
}
