use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::confusion;
use crate::correct::correct_plate;

static OLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("static regex"));
static MERCOSUL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("static regex"));
// accepts both grammars, slot 4 may be either class
static PLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][0-9A-Z][0-9]{2}$").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlateFormat {
    /// LLLNNNN
    Old,
    /// LLLNLNN
    Mercosul,
    Invalid,
}

impl PlateFormat {
    pub fn is_valid(self) -> bool {
        self != PlateFormat::Invalid
    }

    pub fn label(self) -> &'static str {
        if self.is_valid() { "Valid" } else { "Invalid" }
    }
}

/// Correct `plate` and, if it is an Old plate, rewrite it as Mercosul.
/// Anything else comes back corrected but not converted.
pub fn to_mercosul(plate: &str) -> String {
    let plate = correct_plate(plate);
    if !OLD_RE.is_match(&plate) {
        return plate;
    }
    let converted: String = plate.chars().enumerate().map(|(i, c)| {
        if i == 4 {
            confusion::old_to_mercosul(c).unwrap_or(c)
        } else {
            c
        }
    }).collect();
    debug!("converted old plate {} to {}", plate, converted);
    converted
}

fn normalize(plate: &str) -> String {
    plate.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect::<String>().to_uppercase()
}

/// Which grammar `plate` follows, ignoring dashes, whitespace and case.
pub fn classify(plate: &str) -> PlateFormat {
    let plate = normalize(plate);
    if OLD_RE.is_match(&plate) {
        PlateFormat::Old
    } else if MERCOSUL_RE.is_match(&plate) {
        PlateFormat::Mercosul
    } else {
        PlateFormat::Invalid
    }
}

/// Check `plate` against the plate grammar without correcting it.
/// Returns the verdict and its label, "Valid" or "Invalid".
pub fn validate(plate: &str) -> (bool, &'static str) {
    let valid = PLATE_RE.is_match(&normalize(plate));
    debug_assert_eq!(valid, classify(plate).is_valid());
    (valid, if valid { "Valid" } else { "Invalid" })
}
