//! Physical unit descriptors.
//!
//! A [`UnitData`] is a `{magnitude, name}` pair: one stored value equals
//! `magnitude` of `name`.  Names made of an SI prefix and a metre or second
//! symbol (`"nm"`, `"µs"`, `"s"`) are kept compact, so that multiplying
//! `1 nm` by `0.5` reads back as `500 pm`.  Any other name is carried
//! verbatim and only the magnitude changes.

use serde::{Deserialize, Serialize};

/// Round to `sig` significant figures.
pub fn round_sig_figs(x: f64, sig: usize) -> f64 {
    if x == 0.0 || !x.is_finite() || sig == 0 {
        return x;
    }
    // Scientific formatting rounds half-to-even on the decimal digits, the
    // same as `%.4g`.
    format!("{:.*e}", sig - 1, x).parse().unwrap_or(x)
}

/// Significant figures kept on every unit magnitude.
pub const UNIT_SIG_FIGS: usize = 4;

const SI_PREFIXES: &[(&str, i32)] = &[
    ("y", -24), ("z", -21), ("a", -18), ("f", -15), ("p", -12), ("n", -9),
    ("µ", -6), ("u", -6), ("m", -3), ("c", -2), ("d", -1), ("", 0),
    ("k", 3), ("M", 6), ("G", 9), ("T", 12),
];

// Prefixes `compact` may choose from.
const COMPACT_PREFIXES: &[(&str, i32)] = &[
    ("y", -24), ("z", -21), ("a", -18), ("f", -15), ("p", -12), ("n", -9),
    ("µ", -6), ("m", -3), ("", 0), ("k", 3), ("M", 6), ("G", 9), ("T", 12),
];

const BASE_SYMBOLS: &[&str] = &["m", "s"];

/// Split `"nm"` into `(-9, "m")`.  `None` for names that are not a prefixed
/// base symbol.
fn parse_prefixed(name: &str) -> Option<(i32, &'static str)> {
    for base in BASE_SYMBOLS {
        if let Some(prefix) = name.strip_suffix(base) {
            if let Some((_, exp)) = SI_PREFIXES.iter().find(|(p, _)| *p == prefix) {
                return Some((*exp, base));
            }
        }
    }
    None
}

/// A multiplicative unit: `magnitude` × `name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitData {
    pub magnitude: f64,
    pub name: String,
}

impl UnitData {
    /// Build and normalize.
    pub fn new(name: impl Into<String>, magnitude: f64) -> Self {
        let mut u = Self { magnitude, name: name.into() };
        u.normalize();
        u
    }

    /// One second.
    pub fn default_time() -> Self {
        Self::new("s", 1.0)
    }

    /// One metre.
    pub fn default_spatial() -> Self {
        Self::new("m", 1.0)
    }

    /// Scale the quantity by `multiplier`, then re-compact.
    pub fn multiply(&mut self, multiplier: f64) {
        self.magnitude *= multiplier;
        self.normalize();
    }

    fn normalize(&mut self) {
        self.compact();
        self.magnitude = round_sig_figs(self.magnitude, UNIT_SIG_FIGS);
    }

    /// Move powers of 1000 between the magnitude and the prefix so the
    /// magnitude lands in `[1, 1000)`.
    fn compact(&mut self) {
        let Some((exp, base)) = parse_prefixed(&self.name) else {
            return;
        };
        if self.magnitude == 0.0 || !self.magnitude.is_finite() {
            return;
        }
        let value_exp = self.magnitude.abs().log10().floor() as i32 + exp;
        let target = value_exp.div_euclid(3) * 3;
        let Some((prefix, target)) = COMPACT_PREFIXES
            .iter()
            .min_by_key(|(_, e)| (e - target).abs())
            .map(|(p, e)| (*p, *e))
        else {
            return;
        };
        self.magnitude *= 10f64.powi(exp - target);
        self.name = format!("{prefix}{base}");
    }

    /// `true` when the magnitude is exactly one.
    pub fn is_unit_magnitude(&self) -> bool {
        (self.magnitude - 1.0).abs() <= f64::EPSILON
    }
}

impl std::fmt::Display for UnitData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unit_magnitude() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.magnitude, self.name)
        }
    }
}
