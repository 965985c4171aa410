//! Snippet Formatter - code-snippet preparation for tree-rewriting pipelines
//!
//! This library prepares generated code snippets for splicing into a host
//! program's syntax tree. It covers two steps: rendering a snippet's text
//! template with named placeholder values, and normalizing the parsed
//! statement trees so every variable declaration uses the declaration style
//! that prevails in the surrounding program. Parsing the rendered text into
//! statements, and deciding which style prevails, belong to the caller and
//! its collaborators.
//!
//! # Example
//!
//! ```rust
//! use snippet_formatter::ast::{
//!     DeclarationKind, Expression, Statement, VariableDeclaration, VariableDeclarator,
//! };
//! use snippet_formatter::{SnippetFormatter, TemplateValues};
//!
//! // The prevailing kind comes from an analysis of the host program,
//! // computed once per generation session.
//! let formatter = SnippetFormatter::new(DeclarationKind::Var);
//!
//! // Step 1: render the snippet text, then hand it to the parser.
//! let values = TemplateValues::new().with("name", "counter").with("start", 0);
//! let source = formatter.render_template("let {name} = {start};", &values);
//! assert_eq!(source, "let counter = 0;");
//!
//! // Step 2: align the parsed statements with the prevailing style.
//! let parsed = vec![Statement::VariableDeclaration(VariableDeclaration::new(
//!     DeclarationKind::Let,
//!     vec![VariableDeclarator::new("counter", Some(Expression::number(0.0)))],
//! ))];
//! let normalized = formatter.normalize(parsed);
//! match &normalized[0] {
//!     Statement::VariableDeclaration(decl) => assert_eq!(decl.kind, DeclarationKind::Var),
//!     other => panic!("expected a declaration, got {:?}", other),
//! }
//! ```

pub mod ast;
pub mod formatter;
pub mod template;

pub use ast::{DeclarationKind, Statement};
pub use formatter::SnippetFormatter;
pub use template::{render, TemplateError, TemplateRegistry, TemplateValue, TemplateValues};
