//! Fixed tables of characters the character detector tends to mix up.
//!
//! All tables are `(from, to)` pairs. A character without an entry has no
//! remap target and callers leave it as it is.

/// Digits read where a letter belongs. `9` has no look-alike letter.
pub const DIGIT_TO_LETTER: [(char, char); 9] = [
    ('0', 'O'), ('1', 'I'), ('2', 'Z'), ('3', 'J'), ('4', 'A'),
    ('5', 'S'), ('6', 'G'), ('7', 'T'), ('8', 'B'),
];

/// Letters read where a digit belongs.
pub const LETTER_TO_DIGIT: [(char, char); 11] = [
    ('O', '0'), ('Q', '0'), ('D', '0'),
    ('I', '1'), ('J', '1'), ('L', '1'),
    ('Z', '2'),
    ('B', '8'),
    ('S', '5'),
    ('G', '6'),
    ('A', '4'),
];

/// Old plates become Mercosul plates by swapping the fifth digit for a letter.
pub const OLD_TO_MERCOSUL: [(char, char); 10] = [
    ('0', 'A'), ('1', 'B'), ('2', 'C'), ('3', 'D'), ('4', 'E'),
    ('5', 'F'), ('6', 'G'), ('7', 'H'), ('8', 'I'), ('9', 'J'),
];

fn lookup(table: &[(char, char)], c: char) -> Option<char> {
    table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}

pub fn digit_to_letter(c: char) -> Option<char> {
    lookup(&DIGIT_TO_LETTER, c)
}

pub fn letter_to_digit(c: char) -> Option<char> {
    lookup(&LETTER_TO_DIGIT, c)
}

pub fn old_to_mercosul(c: char) -> Option<char> {
    lookup(&OLD_TO_MERCOSUL, c)
}
