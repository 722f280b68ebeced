//! Best-score persistence seam.
//!
//! The store holds a single value under one key, written as a decimal string.
//! Anything unreadable counts as a best of 0.

use anyhow::Result;

pub trait BestScoreStore {
    /// Read the stored best. Missing or malformed data yields 0.
    fn load(&mut self) -> u32;

    /// Overwrite the stored best.
    fn save(&mut self, best: u32) -> Result<()>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<()> {
        (**self).save(best)
    }
}

/// Parse a persisted best score.
///
/// Accepts any non-negative decimal number (fractions are floored); anything
/// else, including an empty string, is 0.
///
/// ```
/// use cloud_jump_core::store::parse_best;
///
/// assert_eq!(parse_best("150"), 150);
/// assert_eq!(parse_best(" 42\n"), 42);
/// assert_eq!(parse_best("12.9"), 12);
/// assert_eq!(parse_best("banana"), 0);
/// assert_eq!(parse_best("-5"), 0);
/// ```
pub fn parse_best(raw: &str) -> u32 {
    try_parse_best(raw).unwrap_or(0)
}

/// Like [`parse_best`], but `None` when `raw` is not a valid score.
///
/// ```
/// use cloud_jump_core::store::try_parse_best;
///
/// assert_eq!(try_parse_best("00"), Some(0));
/// assert_eq!(try_parse_best("0.0"), Some(0));
/// assert_eq!(try_parse_best(""), None);
/// assert_eq!(try_parse_best("NaN"), None);
/// ```
pub fn try_parse_best(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v.floor().min(u32::MAX as f64) as u32),
        _ => None,
    }
}

pub fn format_best(best: u32) -> String {
    best.to_string()
}

/// In-memory store keeping the raw persisted string.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.raw.as_deref().map(parse_best).unwrap_or(0)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.raw = Some(format_best(best));
        self.writes += 1;
        Ok(())
    }
}
