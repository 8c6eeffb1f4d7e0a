//! Field requiredness policy for decision input validation.
//!
//! The upstream data model is lenient: almost every field may be empty.
//! Rather than hard-coding that leniency, requiredness is an explicit
//! policy object so deployments can tighten it without code changes.

/// Which free-text fields must be non-empty when creating a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_title: bool,
    pub require_intent: bool,
    pub require_final_choice: bool,
    pub require_reasoning: bool,
}

impl ValidationPolicy {
    /// Policy that accepts anything, matching the upstream source exactly.
    pub fn lenient() -> Self {
        Self {
            require_title: false,
            require_intent: false,
            require_final_choice: false,
            require_reasoning: false,
        }
    }
}

impl Default for ValidationPolicy {
    /// Default policy: a decision must at least have a title.
    fn default() -> Self {
        Self {
            require_title: true,
            require_intent: false,
            require_final_choice: false,
            require_reasoning: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_requires_only_title() {
        let policy = ValidationPolicy::default();
        assert!(policy.require_title);
        assert!(!policy.require_intent);
        assert!(!policy.require_final_choice);
        assert!(!policy.require_reasoning);
    }

    #[test]
    fn lenient_policy_requires_nothing() {
        let policy = ValidationPolicy::lenient();
        assert!(!policy.require_title);
        assert!(!policy.require_intent);
        assert!(!policy.require_final_choice);
        assert!(!policy.require_reasoning);
    }
}
