use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which template produced a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    ClassDeclaration,
    ClassBody,
    ClassJavadoc,
    InnerClasses,
    Imports,
    MethodList,
    FieldList,
    MethodJavadoc,
    MethodBody,
    MethodSignature,
    FieldJavadoc,
    FieldDeclaration,
}

impl PromptRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PromptRole::ClassDeclaration => "class_declaration",
            PromptRole::ClassBody => "class_body",
            PromptRole::ClassJavadoc => "class_javadoc",
            PromptRole::InnerClasses => "inner_classes",
            PromptRole::Imports => "imports",
            PromptRole::MethodList => "method_list",
            PromptRole::FieldList => "field_list",
            PromptRole::MethodJavadoc => "method_javadoc",
            PromptRole::MethodBody => "method_body",
            PromptRole::MethodSignature => "method_signature",
            PromptRole::FieldJavadoc => "field_javadoc",
            PromptRole::FieldDeclaration => "field_declaration",
        }
    }
}

impl fmt::Display for PromptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    #[serde(skip)]
    pub role: PromptRole,
    pub prompt: String,
    pub completion: String,
}

/// Counters collected while emitting pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionStats {
    pub top_level_classes: usize,
    pub inner_classes: usize,
    pub by_role: BTreeMap<PromptRole, usize>,
}

impl EmissionStats {
    pub fn total(&self) -> usize {
        self.by_role.values().sum()
    }

    pub fn count(&self, role: PromptRole) -> usize {
        self.by_role.get(&role).copied().unwrap_or(0)
    }
}

/// Append-only accumulator the driver emits into.
#[derive(Debug, Clone, Default)]
pub struct PromptBatch {
    pairs: Vec<PromptPair>,
    stats: EmissionStats,
}

impl PromptBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: PromptPair) {
        *self.stats.by_role.entry(pair.role).or_insert(0) += 1;
        self.pairs.push(pair);
    }

    pub fn extend(&mut self, pairs: impl IntoIterator<Item = PromptPair>) {
        for pair in pairs {
            self.push(pair);
        }
    }

    pub(crate) fn stats_mut(&mut self) -> &mut EmissionStats {
        &mut self.stats
    }

    pub fn pairs(&self) -> &[PromptPair] {
        &self.pairs
    }

    pub fn stats(&self) -> &EmissionStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<PromptPair> {
        self.pairs
    }
}
