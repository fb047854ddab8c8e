use std::collections::BTreeMap;

use crate::{AnalysisError, Decision, Normalized};

/// Score and rank for one alternative, in decision-row order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub score: Normalized,
    pub rank: u32,
}

/// A multi-criteria scoring strategy: given an assembled decision, produce
/// a score and rank per alternative.
pub trait Method: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, decision: &Decision) -> Result<Vec<Outcome>, AnalysisError>;
}

/// Read-only method lookup, constructed once at startup and passed by
/// reference to whatever composes an analysis.
pub struct MethodSet {
    methods: BTreeMap<&'static str, Box<dyn Method>>,
}

impl MethodSet {
    /// The methods shipped with this crate. Currently TOPSIS only; further
    /// methods slot in as additional [`Method`] implementations.
    pub fn standard() -> Self {
        Self::from_methods([Box::new(crate::topsis::Topsis) as Box<dyn Method>])
    }

    pub fn from_methods(methods: impl IntoIterator<Item = Box<dyn Method>>) -> Self {
        Self {
            methods: methods
                .into_iter()
                .map(|method| (method.name(), method))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Method> {
        self.methods.get(name).map(Box::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }
}
