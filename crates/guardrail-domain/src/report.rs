use guardrail_types::{Action, DecisionRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecisionCounts {
    pub allow: u32,
    pub sanitize: u32,
    pub escalate: u32,
    pub block: u32,
    /// Records decided by the default action (no policy applied).
    pub defaulted: u32,
}

impl DecisionCounts {
    pub fn from_records(records: &[DecisionRecord]) -> Self {
        let mut counts = DecisionCounts::default();
        for r in records {
            match r.decision {
                Action::Allow => counts.allow += 1,
                Action::Sanitize => counts.sanitize += 1,
                Action::Escalate => counts.escalate += 1,
                Action::Block => counts.block += 1,
            }
            if r.applied_policies.is_empty() {
                counts.defaulted += 1;
            }
        }
        counts
    }

    pub fn get(&self, action: Action) -> u32 {
        match action {
            Action::Allow => self.allow,
            Action::Sanitize => self.sanitize,
            Action::Escalate => self.escalate,
            Action::Block => self.block,
        }
    }

    pub fn total(&self) -> u32 {
        self.allow + self.sanitize + self.escalate + self.block
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DomainReport {
    /// One record per input, in input order.
    pub records: Vec<DecisionRecord>,
    pub counts: DecisionCounts,
}

impl DomainReport {
    pub fn from_records(records: Vec<DecisionRecord>) -> Self {
        let counts = DecisionCounts::from_records(&records);
        Self { records, counts }
    }

    /// True if any decision is at least as restrictive as `threshold`.
    pub fn any_at_least(&self, threshold: Action) -> bool {
        self.records
            .iter()
            .any(|r| r.decision.is_at_least_as_restrictive_as(threshold))
    }
}
