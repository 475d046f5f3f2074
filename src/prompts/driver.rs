//! Depth-first, pre-order emission over the class tree.
//!
//! For each top-level class, in table order:
//! 1. declaration, body, javadoc
//! 2. every inner class, fully expanded with these same steps
//! 3. the inner-classes list
//! 4. imports
//! 5. the methods list, then each method's pairs
//! 6. the fields list, then each field's pairs

use super::pair::PromptBatch;
use super::templates::TemplateEngine;
use crate::config::PromptConfig;
use crate::core::{QualifiedName, Record};
use crate::index::EntityIndex;
use tracing::{debug, info_span, warn};

/// Walks an [`EntityIndex`] and emits pairs into a [`PromptBatch`].
pub struct PromptDriver<'a> {
    index: &'a EntityIndex,
    templates: TemplateEngine<'a>,
}

impl<'a> PromptDriver<'a> {
    pub fn new(index: &'a EntityIndex, config: &'a PromptConfig) -> Self {
        Self {
            index,
            templates: TemplateEngine::new(config),
        }
    }

    /// Emit every top-level class in table order.
    pub fn emit_all(&self, out: &mut PromptBatch) {
        let _span = info_span!("emit").entered();
        for class in self.index.classes() {
            self.emit_class(class, out);
        }
    }

    /// Emit one top-level class and everything nested under it.
    pub fn emit_class(&self, class: &'a Record, out: &mut PromptBatch) {
        out.stats_mut().top_level_classes += 1;
        let mut ancestors = Vec::new();
        self.visit_class(class, &mut ancestors, out);
    }

    fn visit_class(
        &self,
        class: &'a Record,
        ancestors: &mut Vec<&'a QualifiedName>,
        out: &mut PromptBatch,
    ) {
        let templates = &self.templates;
        debug!(class = %class.name, depth = ancestors.len(), "emitting class");

        out.push(templates.class_declaration(class));
        out.push(templates.class_body(class));
        out.extend(templates.class_javadoc(class));

        ancestors.push(&class.name);
        for inner in self.index.inner_classes_of(&class.name) {
            // A class nested under its own name would recurse forever.
            if ancestors.contains(&&inner.name) {
                warn!(class = %inner.name, "skipping inner class that encloses itself");
                continue;
            }
            out.stats_mut().inner_classes += 1;
            self.visit_class(inner, ancestors, out);
        }
        ancestors.pop();

        out.extend(templates.inner_classes(class, self.index.inner_classes_of(&class.name)));
        out.extend(templates.imports(class));

        out.extend(templates.method_list(class, self.index.methods_of(&class.name)));
        for method in self.index.methods_of(&class.name) {
            out.extend(templates.member(class, method));
        }

        out.push(templates.field_list(class, self.index.fields_of(&class.name)));
        for field in self.index.fields_of(&class.name) {
            out.extend(templates.member(class, field));
        }
    }
}

/// Build the full, ordered pair sequence for an index.
pub fn generate_prompts(index: &EntityIndex, config: &PromptConfig) -> PromptBatch {
    let mut batch = PromptBatch::new();
    PromptDriver::new(index, config).emit_all(&mut batch);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;
    use crate::prompts::{PromptPair, PromptRole};
    use pretty_assertions::assert_eq;

    fn class(simple: &str, name: &str, parent: &str) -> Record {
        Record::new(EntityKind::Class, simple, name)
            .with_parent(parent)
            .with_definition(format!("class {simple}"))
            .with_body(format!("class {simple} {{}}"))
    }

    fn method(simple: &str, parent: &str) -> Record {
        Record::new(EntityKind::Method, simple, format!("{parent}.{simple}"))
            .with_parent(parent)
            .with_definition(format!("void {simple}()"))
            .with_body(format!("void {simple}() {{}}"))
    }

    fn field(simple: &str, parent: &str) -> Record {
        Record::new(EntityKind::Field, simple, format!("{parent}.{simple}"))
            .with_parent(parent)
            .with_definition(format!("int {simple};"))
    }

    fn run(records: Vec<Record>) -> PromptBatch {
        generate_prompts(&EntityIndex::build(records), &PromptConfig::default())
    }

    /// (role, simple name of the subject mentioned first in the prompt)
    fn outline(pairs: &[PromptPair]) -> Vec<(PromptRole, String)> {
        pairs
            .iter()
            .map(|pair| {
                let subject = pair
                    .prompt
                    .split_whitespace()
                    .skip_while(|word| *word != "named" && *word != "method" && *word != "field")
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                (pair.role, subject)
            })
            .collect()
    }

    #[test]
    fn test_lone_class_emits_three_pairs() {
        let foo = Record::new(EntityKind::Class, "Foo", "com.x.Foo")
            .with_definition("public class Foo")
            .with_body("public class Foo {}");
        let batch = run(vec![foo]);

        let roles: Vec<_> = batch.pairs().iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::ClassDeclaration,
                PromptRole::ClassBody,
                PromptRole::FieldList
            ]
        );
        assert_eq!(batch.pairs()[2].completion, "  ###END");
    }

    #[test]
    fn test_inner_class_expanded_before_parent_lists() {
        let batch = run(vec![
            class("Outer", "com.x.Outer", ""),
            class("Inner", "com.x.Outer.Inner", "com.x.Outer"),
            method("bar", "com.x.Outer.Inner"),
        ]);

        let expected: Vec<(PromptRole, String)> = vec![
            (PromptRole::ClassDeclaration, "Outer"),
            (PromptRole::ClassBody, "Outer"),
            (PromptRole::ClassDeclaration, "Inner"),
            (PromptRole::ClassBody, "Inner"),
            (PromptRole::MethodList, "Inner"),
            (PromptRole::MethodBody, "bar"),
            (PromptRole::MethodSignature, "bar"),
            (PromptRole::FieldList, "Inner"),
            (PromptRole::InnerClasses, "Outer"),
            (PromptRole::FieldList, "Outer"),
        ]
        .into_iter()
        .map(|(role, name)| (role, name.to_string()))
        .collect();

        assert_eq!(outline(batch.pairs()), expected);
        assert_eq!(batch.pairs()[8].completion, " class Inner ###END");
        assert_eq!(batch.stats().top_level_classes, 1);
        assert_eq!(batch.stats().inner_classes, 1);
    }

    #[test]
    fn test_full_class_order() {
        let outer = class("Foo", "com.x.Foo", "")
            .with_javadoc("/** Foo. */")
            .with_imports("import a.B;");
        let documented = method("run", "com.x.Foo").with_javadoc("/** Runs. */");
        let batch = run(vec![
            field("size", "com.x.Foo").with_javadoc("/** Size. */"),
            outer,
            documented,
            method("stop", "com.x.Foo"),
            field("name", "com.x.Foo"),
        ]);

        let roles: Vec<_> = batch.pairs().iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::ClassDeclaration,
                PromptRole::ClassBody,
                PromptRole::ClassJavadoc,
                PromptRole::Imports,
                PromptRole::MethodList,
                PromptRole::MethodJavadoc,
                PromptRole::MethodBody,
                PromptRole::MethodSignature,
                PromptRole::MethodBody,
                PromptRole::MethodSignature,
                PromptRole::FieldList,
                PromptRole::FieldJavadoc,
                PromptRole::FieldDeclaration,
                PromptRole::FieldDeclaration,
            ]
        );
        assert_eq!(batch.pairs()[10].completion, " int size;\nint name; ###END");
    }

    #[test]
    fn test_roots_in_table_order() {
        let batch = run(vec![class("B", "com.x.B", ""), class("A", "com.x.A", "")]);
        let declared: Vec<_> = outline(batch.pairs())
            .into_iter()
            .filter(|(role, _)| *role == PromptRole::ClassDeclaration)
            .map(|(_, name)| name)
            .collect();
        assert_eq!(declared, vec!["B", "A"]);
    }

    #[test]
    fn test_unresolved_children_are_silently_skipped() {
        let batch = run(vec![
            class("Foo", "com.x.Foo", ""),
            method("lost", "com.x.Missing"),
            class("Ghost", "com.x.Missing.Ghost", "com.x.Missing"),
            Record::new(EntityKind::Enum, "Color", "com.x.Color"),
        ]);
        assert_eq!(batch.len(), 3);
        assert!(batch.pairs().iter().all(|p| !p.prompt.contains("lost")));
        assert!(batch.pairs().iter().all(|p| !p.prompt.contains("Ghost")));
    }

    #[test]
    fn test_self_enclosing_class_does_not_recurse() {
        let batch = run(vec![
            class("Foo", "com.x.Foo", ""),
            class("Foo", "com.x.Foo", "com.x.Foo"),
        ]);
        assert_eq!(batch.stats().inner_classes, 0);
        assert_eq!(batch.stats().count(PromptRole::ClassDeclaration), 1);
        assert_eq!(batch.stats().count(PromptRole::InnerClasses), 1);
    }

    #[test]
    fn test_deeply_nested_inner_classes() {
        let batch = run(vec![
            class("A", "a.A", ""),
            class("B", "a.A.B", "a.A"),
            class("C", "a.A.B.C", "a.A.B"),
        ]);
        let declared: Vec<_> = outline(batch.pairs())
            .into_iter()
            .filter(|(role, _)| *role == PromptRole::ClassDeclaration)
            .map(|(_, name)| name)
            .collect();
        assert_eq!(declared, vec!["A", "B", "C"]);
        assert_eq!(batch.stats().inner_classes, 2);
        assert_eq!(batch.stats().count(PromptRole::FieldList), 3);
    }

    #[test]
    fn test_emission_is_deterministic() {
        let records = vec![
            class("Outer", "com.x.Outer", ""),
            class("Inner", "com.x.Outer.Inner", "com.x.Outer"),
            method("bar", "com.x.Outer"),
            field("baz", "com.x.Outer.Inner"),
        ];
        assert_eq!(
            run(records.clone()).into_pairs(),
            run(records).into_pairs()
        );
    }
}
