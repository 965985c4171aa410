//! Snippet formatting for splicing generated code into a host program
//!
//! `SnippetFormatter` pairs the two steps every generated snippet goes
//! through: rendering its text template, and normalizing the freshly parsed
//! statement trees so declaration keywords match the style that dominates the
//! surrounding program. The prevailing declaration kind is decided once per
//! generation session by the caller, typically from an analysis of the host
//! program, and cached at construction; it is never re-computed.

use crate::ast::visit::{walk_variable_declaration, AstVisitor};
use crate::ast::{DeclarationKind, Statement, VariableDeclaration};
use crate::template::{self, TemplateValues};

/// Formats generated snippets before they are spliced into a host tree
#[derive(Debug, Clone, Copy)]
pub struct SnippetFormatter {
    prevailing_kind: DeclarationKind,
}

impl SnippetFormatter {
    /// Create a formatter for a session with the given prevailing kind
    pub fn new(prevailing_kind: DeclarationKind) -> Self {
        Self { prevailing_kind }
    }

    /// The declaration kind cached at construction
    pub fn prevailing_kind(&self) -> DeclarationKind {
        self.prevailing_kind
    }

    /// Render a code template with the given placeholder values
    pub fn render_template(&self, template: &str, values: &TemplateValues) -> String {
        template::render(template, values)
    }

    /// Rewrite declaration keywords in freshly parsed statements
    ///
    /// Walks every node of every statement, however deeply nested. When the
    /// prevailing kind is the function-scoped `var`, each variable
    /// declaration found is switched to `var` in place; block-scoped
    /// prevailing kinds leave the statements untouched. Nothing but the
    /// `kind` field of declaration nodes is ever modified, so the operation
    /// is idempotent and shape-preserving. Returns the same statements for
    /// chaining.
    pub fn normalize(&self, mut statements: Vec<Statement>) -> Vec<Statement> {
        let mut enforcer = KindEnforcer {
            prevailing_kind: self.prevailing_kind,
        };
        for statement in &mut statements {
            enforcer.visit_statement(statement);
        }
        statements
    }
}

/// Switches declarations to `var` when that is the prevailing kind
struct KindEnforcer {
    prevailing_kind: DeclarationKind,
}

impl AstVisitor for KindEnforcer {
    fn visit_variable_declaration(&mut self, decl: &mut VariableDeclaration) {
        if self.prevailing_kind.is_function_scoped() {
            decl.kind = DeclarationKind::Var;
        }
        walk_variable_declaration(self, decl);
    }
}
