const ALPHABET_RUNS: [&str; 24] = [
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno",
    "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
];

// exactly these nine runs count; "890" is in, the wrap-around "901" is not
const NUMBER_RUNS: [&str; 9] = [
    "123", "234", "345", "456", "567", "678", "789", "890", "012",
];

pub(crate) fn has_alphabet_run(password: &str) -> bool {
    let lowered = password.to_lowercase();
    ALPHABET_RUNS.iter().any(|run| lowered.contains(run))
}

pub(crate) fn has_number_run(password: &str) -> bool {
    NUMBER_RUNS.iter().any(|run| password.contains(run))
}

// case-sensitive, so "aAa" passes while "aaa" does not
pub(crate) fn has_repeated_char(password: &str) -> bool {
    let mut run = 0;
    let mut previous = None;
    for c in password.chars() {
        if Some(c) == previous {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}
