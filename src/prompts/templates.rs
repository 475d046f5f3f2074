//! Question/answer templates.
//!
//! Every function here is pure: a record (plus its owning class or children)
//! in, zero or more [`PromptPair`]s out. Wrapping text comes from
//! [`PromptConfig`].

use super::pair::{PromptPair, PromptRole};
use crate::config::PromptConfig;
use crate::core::{is_blank, EntityKind, Record};

/// Renders records into prompt/completion pairs.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine<'a> {
    config: &'a PromptConfig,
}

/// "class named Foo whose fully qualified class name com.x.Foo"
fn class_subject(class: &Record) -> String {
    format!(
        "class named {} whose fully qualified class name {}",
        class.simple_name, class.name
    )
}

fn join_definitions<'r>(records: impl IntoIterator<Item = &'r Record>) -> String {
    records
        .into_iter()
        .map(|record| record.definition.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl<'a> TemplateEngine<'a> {
    pub fn new(config: &'a PromptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PromptConfig {
        self.config
    }

    fn pair(&self, role: PromptRole, question: &str, answer: &str) -> PromptPair {
        let config = self.config;
        PromptPair {
            role,
            prompt: format!(
                "{}{}{}",
                config.prompt_prefix, question, config.prompt_delimiter
            ),
            completion: format!(
                "{}{}{}",
                config.completion_prefix, answer, config.completion_end_delimiter
            ),
        }
    }

    pub fn class_declaration(&self, class: &Record) -> PromptPair {
        let question = format!("How is {} declared?", class_subject(class));
        self.pair(PromptRole::ClassDeclaration, &question, &class.definition)
    }

    pub fn class_body(&self, class: &Record) -> PromptPair {
        let question = format!("How is {} defined?", class_subject(class));
        self.pair(PromptRole::ClassBody, &question, &class.body)
    }

    /// Only when the class carries non-blank JavaDoc.
    pub fn class_javadoc(&self, class: &Record) -> Option<PromptPair> {
        class.has_javadoc().then(|| {
            let question = format!(
                "What does {} do according to the JavaDoc?",
                class_subject(class)
            );
            self.pair(PromptRole::ClassJavadoc, &question, &class.javadoc)
        })
    }

    /// Only when the joined inner-class definitions are non-blank.
    pub fn inner_classes<'r>(
        &self,
        class: &Record,
        inner_classes: impl IntoIterator<Item = &'r Record>,
    ) -> Option<PromptPair> {
        let answer = join_definitions(inner_classes);
        (!is_blank(&answer)).then(|| {
            let question = format!(
                "What are the inner classes defined inside of {}?",
                class_subject(class)
            );
            self.pair(PromptRole::InnerClasses, &question, &answer)
        })
    }

    /// Only when the class has a non-blank import block.
    pub fn imports(&self, class: &Record) -> Option<PromptPair> {
        class.has_imports().then(|| {
            let question = format!("What are the imports for {}?", class_subject(class));
            self.pair(PromptRole::Imports, &question, &class.import_body)
        })
    }

    /// Only when the joined method definitions are non-blank.
    pub fn method_list<'r>(
        &self,
        class: &Record,
        methods: impl IntoIterator<Item = &'r Record>,
    ) -> Option<PromptPair> {
        let answer = join_definitions(methods);
        (!is_blank(&answer)).then(|| {
            let question = format!("What methods does {} have?", class_subject(class));
            self.pair(PromptRole::MethodList, &question, &answer)
        })
    }

    /// Always emitted, even for a class without fields.
    pub fn field_list<'r>(
        &self,
        class: &Record,
        fields: impl IntoIterator<Item = &'r Record>,
    ) -> PromptPair {
        let answer = join_definitions(fields);
        let question = format!("What fields does {} have?", class_subject(class));
        self.pair(PromptRole::FieldList, &question, &answer)
    }

    /// Pairs for one member of `owner`.
    ///
    /// Methods yield javadoc (if any), body, signature; fields yield javadoc
    /// (if any), declaration. Classes are rendered through the class
    /// templates and enums never produce pairs.
    pub fn member(&self, owner: &Record, member: &Record) -> Vec<PromptPair> {
        match member.kind {
            EntityKind::Method => self.method(owner, member),
            EntityKind::Field => self.field(owner, member),
            EntityKind::Class | EntityKind::Enum => Vec::new(),
        }
    }

    fn method(&self, owner: &Record, method: &Record) -> Vec<PromptPair> {
        let owner = class_subject(owner);
        let name = &method.simple_name;
        let mut pairs = Vec::with_capacity(3);

        if method.has_javadoc() {
            let question =
                format!("What does method {name} do according to the JavaDoc from {owner}?");
            pairs.push(self.pair(PromptRole::MethodJavadoc, &question, &method.javadoc));
        }

        let question = format!("How is method {name} defined from {owner}?");
        pairs.push(self.pair(PromptRole::MethodBody, &question, &method.body));

        let question = format!("What is the method {name} signature from {owner}?");
        pairs.push(self.pair(PromptRole::MethodSignature, &question, &method.definition));

        pairs
    }

    fn field(&self, owner: &Record, field: &Record) -> Vec<PromptPair> {
        let owner = class_subject(owner);
        let name = &field.simple_name;
        let mut pairs = Vec::with_capacity(2);

        if field.has_javadoc() {
            let question =
                format!("What is the field {name} defined in {owner} according to the JavaDoc?");
            pairs.push(self.pair(PromptRole::FieldJavadoc, &question, &field.javadoc));
        }

        let question = format!("How is the field {name} defined which is in {owner}?");
        pairs.push(self.pair(PromptRole::FieldDeclaration, &question, &field.definition));

        pairs
    }
}
