use guardrail_types::Action;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRow {
    pub id: String,
    pub decision: Action,
    pub applied_policies: Vec<String>,
    pub reason: String,
    pub final_output: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub allow: u32,
    pub sanitize: u32,
    pub escalate: u32,
    pub block: u32,
    pub defaulted: u32,
}

impl RenderableCounts {
    pub fn get(&self, action: Action) -> u32 {
        match action {
            Action::Allow => self.allow,
            Action::Sanitize => self.sanitize,
            Action::Escalate => self.escalate,
            Action::Block => self.block,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableBatch {
    pub rows: Vec<RenderableRow>,
    pub counts: RenderableCounts,
    /// Where the JSON document was written, if the write succeeded.
    pub output_path: Option<String>,
}
