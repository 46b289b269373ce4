//! Best-effort results for components that never fail outward.
//!
//! The text extractor and the job fetcher swallow their own failures and hand
//! back a default or sentinel value instead. `Outcome` keeps that visible: a
//! `Fallback` still carries a usable value, plus the reason it was substituted.

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Outcome::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Value(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Value(value) | Outcome::Fallback { value, .. } => value,
        }
    }
}
