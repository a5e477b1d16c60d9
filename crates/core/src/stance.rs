//! Stance catalog constants and name normalization.
//!
//! The catalog is a fixed lookup table seeded at startup. Fighters reference
//! a stance by id; clients send and receive the stance by name.

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

pub const STANCE_ORTHODOX: &str = "Orthodox";
pub const STANCE_SOUTHPAW: &str = "Southpaw";
pub const STANCE_SWITCH: &str = "Switch";
pub const STANCE_OPEN: &str = "Open Stance";
pub const STANCE_SIDEWAYS: &str = "Sideways";

/// All catalog names, in seed order (ids 1..=5 on a fresh database).
pub const ALL_STANCES: &[&str] = &[
    STANCE_ORTHODOX,
    STANCE_SOUTHPAW,
    STANCE_SWITCH,
    STANCE_OPEN,
    STANCE_SIDEWAYS,
];

/* --------------------------------------------------------------------------
Normalization
-------------------------------------------------------------------------- */

/// Title-case a free-text stance so it matches the catalog spelling.
///
/// The first letter of every word is upper-cased and the rest lower-cased.
/// Word boundaries are any non-alphabetic character, so `"open stance"`
/// becomes `"Open Stance"` and `"SOUTHPAW"` becomes `"Southpaw"`.
pub fn normalize_stance_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.trim().chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Whether `name`, in any letter case, is one of the catalog stances.
pub fn is_known_stance(name: &str) -> bool {
    ALL_STANCES.contains(&normalize_stance_name(name).as_str())
}
