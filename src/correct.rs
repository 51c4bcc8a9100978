//! Slot-based repair of a 7-character plate read.
//!
//! Slots 0-2 hold letters and slots 3, 5 and 6 hold digits on both Old and
//! Mercosul plates. Slot 4 is a digit on Old plates and a letter on Mercosul
//! plates, so it is never touched here.

use log::trace;

use crate::confusion;

pub const PLATE_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Letter,
    Digit,
    Either,
}

const SLOTS: [Slot; PLATE_LEN] = [
    Slot::Letter, Slot::Letter, Slot::Letter,
    Slot::Digit,
    Slot::Either,
    Slot::Digit, Slot::Digit,
];

/// Keep ASCII letters and digits only, upper-cased.
pub fn strip_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Fix letter/digit confusions by slot. Reads that are not exactly seven
/// characters long after [`strip_upper`] come back stripped but otherwise
/// unchanged.
pub fn correct_plate(raw: &str) -> String {
    let text = strip_upper(raw);
    if text.len() != PLATE_LEN {
        return text;
    }

    text.chars().zip(SLOTS.iter()).enumerate().map(|(i, (c, slot))| {
        let fixed = match slot {
            Slot::Letter => confusion::digit_to_letter(c),
            Slot::Digit => confusion::letter_to_digit(c),
            Slot::Either => None,
        };
        match fixed {
            Some(f) => {
                trace!("slot {}: '{}' -> '{}'", i, c, f);
                f
            },
            None => c,
        }
    }).collect()
}
