use crate::generator::LogicalPlan;
use std::fmt;

/// A serialized logical plan: one expression per line, each followed by a line break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanText(String);

impl PlanText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The expressions of the plan, in order.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for PlanText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlanText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins the expressions of a plan into [`PlanText`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanSerializer;

impl PlanSerializer {
    /// An empty plan serializes to an empty text.
    pub fn serialize(plan: &LogicalPlan) -> PlanText {
        let mut text = String::with_capacity(plan.iter().map(|e| e.as_str().len() + 1).sum());
        for expression in plan {
            text.push_str(expression.as_str());
            text.push('\n');
        }
        PlanText(text)
    }
}
