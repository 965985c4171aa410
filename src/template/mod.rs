//! Text templates for generated code snippets
//!
//! A template is a plain string with `{name}` placeholders. Rendering
//! substitutes each placeholder with the text form of a mapped value and is
//! the first step in producing a generated snippet; the rendered text is then
//! handed to the parser and the resulting statements spliced into the host
//! tree.
//!
//! # Example
//!
//! ```rust
//! use snippet_formatter::template::{render, TemplateValues};
//!
//! let values = TemplateValues::new().with("name", "probe").with("limit", 16);
//! let source = render("var {name} = {limit};", &values);
//! assert_eq!(source, "var probe = 16;");
//! ```

mod registry;
mod renderer;

pub use registry::{TemplateError, TemplateRegistry};
pub use renderer::{render, TemplateValue, TemplateValues};
