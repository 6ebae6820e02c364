use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A guardrail outcome.
///
/// Variants are declared most restrictive first, so the derived `Ord` agrees with
/// [`Action::restrictiveness`]: `Block < Escalate < Sanitize < Allow`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Block,
    Escalate,
    Sanitize,
    Allow,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0} (expected allow|sanitize|escalate|block)")]
pub struct ParseActionError(pub String);

impl Action {
    /// Every action, most restrictive first.
    pub const ALL: [Action; 4] = [
        Action::Block,
        Action::Escalate,
        Action::Sanitize,
        Action::Allow,
    ];

    /// Restrictiveness rank. Lower is more restrictive.
    pub fn restrictiveness(self) -> u8 {
        match self {
            Action::Block => 0,
            Action::Escalate => 1,
            Action::Sanitize => 2,
            Action::Allow => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Block => "block",
            Action::Escalate => "escalate",
            Action::Sanitize => "sanitize",
            Action::Allow => "allow",
        }
    }

    pub fn is_at_least_as_restrictive_as(self, other: Action) -> bool {
        self.restrictiveness() <= other.restrictiveness()
    }

    /// Fixed replacement text shown instead of the original output.
    ///
    /// `None` for [`Action::Allow`], which passes the original output through.
    pub fn replacement_text(self) -> Option<&'static str> {
        match self {
            Action::Allow => None,
            Action::Sanitize => Some(ids::OUTPUT_SAFE_FALLBACK),
            Action::Escalate => Some(ids::OUTPUT_HUMAN_REVIEW),
            Action::Block => Some(ids::OUTPUT_SUPPRESSED),
        }
    }

    /// Build the text released to the caller for this action.
    pub fn final_output(self, original: &str) -> String {
        self.replacement_text()
            .map(str::to_string)
            .unwrap_or_else(|| original.to_string())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Names are matched exactly; `"Block"` is not an action.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Action::Block),
            "escalate" => Ok(Action::Escalate),
            "sanitize" => Ok(Action::Sanitize),
            "allow" => Ok(Action::Allow),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_order_matches_restrictiveness_table() {
        for a in Action::ALL {
            for b in Action::ALL {
                assert_eq!(
                    a.cmp(&b),
                    a.restrictiveness().cmp(&b.restrictiveness()),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn restrictiveness_ranks_are_distinct_and_dense() {
        let mut ranks: Vec<u8> = Action::ALL.iter().map(|a| a.restrictiveness()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn parse_round_trips_names() {
        for a in Action::ALL {
            assert_eq!(a.as_str().parse::<Action>(), Ok(a));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Block".parse::<Action>().is_err());
        assert!(" allow".parse::<Action>().is_err());
        assert!("fly".parse::<Action>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Action::Escalate).expect("serialize");
        assert_eq!(json, "\"escalate\"");
    }

    #[test]
    fn final_output_passes_original_only_for_allow() {
        assert_eq!(Action::Allow.final_output("hello"), "hello");
        assert_eq!(Action::Sanitize.final_output("hello"), ids::OUTPUT_SAFE_FALLBACK);
        assert_eq!(Action::Escalate.final_output("hello"), ids::OUTPUT_HUMAN_REVIEW);
        assert_eq!(Action::Block.final_output("hello"), ids::OUTPUT_SUPPRESSED);
    }

    #[test]
    fn at_least_as_restrictive() {
        assert!(Action::Block.is_at_least_as_restrictive_as(Action::Escalate));
        assert!(Action::Escalate.is_at_least_as_restrictive_as(Action::Escalate));
        assert!(!Action::Allow.is_at_least_as_restrictive_as(Action::Sanitize));
    }
}
