//! The build-wizard session: slot selection, price aggregation, and the
//! socket-compatibility heuristic.
//!
//! A [`BuildSession`] is purely transient, single-owner state. All derived
//! values (total price, compatibility issues) are recomputed from the
//! current selection on every read; nothing is cached between calls.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Part, PartCategory};

/// One problem found between two selected parts.
///
/// Derived from the current selection and never stored independently of
/// it.
pub type CompatibilityIssue = String;

/// Matches a socket token in free-text specs: `LGA` optionally followed
/// by whitespace and digits, or `AM` followed by a single digit. Case
/// insensitive, first match wins.
fn socket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)LGA\s?\d+|AM\d").expect("socket pattern is valid"))
}

/// Extract the first socket token from a spec string, if any.
fn socket_token(specs: &str) -> Option<&str> {
    socket_regex().find(specs).map(|m| m.as_str())
}

/// Canonical form for socket comparison: uppercased with internal
/// whitespace stripped, so `LGA 1700` and `lga1700` compare equal.
fn normalize_socket(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Per-user build state: exactly one slot per [`PartCategory`], each
/// empty or holding one part.
///
/// Created empty at session start. Assigning a slot replaces any prior
/// part; no history is kept. No operation here can fail -- inputs are
/// pre-validated by the catalog/UI layer.
#[derive(Debug, Clone, Default)]
pub struct BuildSession {
    slots: [Option<Part>; PartCategory::ALL.len()],
}

impl BuildSession {
    /// A session with all eight slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot's content with `part`.
    ///
    /// The catalog is trusted to pre-filter parts by category; no
    /// cross-check is performed. Reselecting the same part is idempotent.
    pub fn select_part(&mut self, category: PartCategory, part: Part) {
        self.slots[category.index()] = Some(part);
    }

    /// Empty one slot. Idempotent on an already-empty slot.
    pub fn clear_slot(&mut self, category: PartCategory) {
        self.slots[category.index()] = None;
    }

    /// The part currently in `category`'s slot, if any.
    pub fn slot(&self, category: PartCategory) -> Option<&Part> {
        self.slots[category.index()].as_ref()
    }

    /// Sum of `price` over all filled slots; `0` when every slot is
    /// empty. Pure function of the current state.
    pub fn total_price(&self) -> i64 {
        self.slots.iter().flatten().map(|p| p.price).sum()
    }

    /// Compatibility issues derived from the current selection.
    ///
    /// Only the CPU x Motherboard socket pairing is ever checked -- a
    /// known limitation of the wizard, not a bug. When either side's
    /// specs carry no parseable socket token the check is skipped
    /// silently: absence of a socket is not treated as a conflict.
    pub fn compatibility_issues(&self) -> Vec<CompatibilityIssue> {
        let mut issues = Vec::new();

        if let (Some(cpu), Some(mobo)) = (
            self.slot(PartCategory::Cpu),
            self.slot(PartCategory::Motherboard),
        ) {
            if let (Some(cpu_socket), Some(mobo_socket)) =
                (socket_token(&cpu.specs), socket_token(&mobo.specs))
            {
                if normalize_socket(cpu_socket) != normalize_socket(mobo_socket) {
                    issues.push(format!(
                        "Socket mismatch: CPU ({cpu_socket}) vs Motherboard ({mobo_socket})"
                    ));
                }
            }
        }

        issues
    }

    /// Whether the build is complete enough to export: at least one part
    /// selected and no known conflicts.
    pub fn can_export(&self) -> bool {
        self.compatibility_issues().is_empty() && self.total_price() > 0
    }
}
