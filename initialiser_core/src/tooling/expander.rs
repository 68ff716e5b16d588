//! Text-level expansion of marked declarations.
//!
//! The expander parses a file with `syn`, evaluates every marked declaration,
//! and splices the result back into the original text: the marker attribute is
//! removed and the generated `impl` block is appended after the type's last
//! inherent `impl` (or after the type itself). A type that already defines
//! `new` is reported instead of receiving a second one.
//! Everything else in the file is left byte-for-byte untouched.

use super::source::{SourceLocation, SourceText};
use crate::{
    config::InitialiserConfig,
    diagnostic::{Diagnostic, DiagnosticKind},
    engine::{DEFAULT_MARKER, Outcome},
    error::Result,
    model::GeneratedFragment,
    syntax::{
        CONSTRUCTOR_NAME, MARKER_NAME,
        lower::{collect_inherent_members, lower_item, type_name},
        marker::{is_marker, item_attrs},
        render::evaluate_rust,
    },
};
use std::ops::Range;
use syn::{Attribute, Fields, GenericParam, Item, ItemStruct, spanned::Spanned};
use tracing::{debug, info, trace};

const BOM: char = '\u{feff}';

/// Result of expanding one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The rewritten source text.
    pub source: String,
    /// Diagnostics in source order.
    pub diagnostics: Vec<Diagnostic<SourceLocation>>,
    /// Number of declarations that received a generated initializer.
    pub expanded: usize,
}

impl Expansion {
    pub fn errors(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Expands marked declarations in Rust source text.
#[derive(Debug, Clone)]
pub struct Expander {
    markers: Vec<String>,
}

impl Default for Expander {
    fn default() -> Self {
        Expander::new(vec![MARKER_NAME.to_string()])
    }
}

impl Expander {
    pub fn new(markers: Vec<String>) -> Self {
        Expander { markers }
    }

    pub fn from_config(config: &InitialiserConfig) -> Self {
        Expander::new(config.marker_names())
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn expand_source(&self, source: &str) -> Result<Expansion> {
        let (bom, source) = match source.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, source),
        };
        let file = syn::parse_file(source)?;
        let text = SourceText::new(source);

        let mut pass = ExpansionPass {
            markers: &self.markers,
            text: &text,
            edits: Vec::new(),
            diagnostics: Vec::new(),
            expanded: 0,
        };
        pass.visit_items(&file.items);

        let ExpansionPass {
            mut edits,
            diagnostics,
            expanded,
            ..
        } = pass;

        edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        let mut output = String::with_capacity(source.len() + BOM.len_utf8());
        if bom {
            output.push(BOM);
        }
        let body_start = output.len();
        output.push_str(source);
        for edit in edits {
            let range = edit.range.start + body_start..edit.range.end + body_start;
            output.replace_range(range, &edit.replacement);
        }

        debug!(
            "Expanded {} declaration(s) with {} diagnostic(s)",
            expanded,
            diagnostics.len()
        );

        Ok(Expansion {
            source: output,
            diagnostics,
            expanded,
        })
    }
}

struct Edit {
    range: Range<usize>,
    replacement: String,
}

struct ExpansionPass<'a> {
    markers: &'a [String],
    text: &'a SourceText<'a>,
    edits: Vec<Edit>,
    diagnostics: Vec<Diagnostic<SourceLocation>>,
    expanded: usize,
}

impl ExpansionPass<'_> {
    /// `items` is one module body; inherent impls are looked up among siblings.
    fn visit_items(&mut self, items: &[Item]) {
        for item in items {
            self.visit_item(item, items);

            if let Item::Mod(module) = item
                && let Some((_, content)) = &module.content
            {
                self.visit_items(content);
            }
        }
    }

    fn visit_item(&mut self, item: &Item, siblings: &[Item]) {
        let markers: Vec<&Attribute> = item_attrs(item)
            .iter()
            .filter(|attr| is_marker(attr, self.markers))
            .collect();
        let Some(first) = markers.first() else {
            return;
        };
        let anchor = SourceLocation::from(first.span().start());

        for marker in &markers {
            let range = self.attribute_removal_range(marker);
            self.edits.push(Edit {
                range,
                replacement: String::new(),
            });
        }

        let outcome = match lower_item(item) {
            Some(mut declaration) => {
                declaration
                    .members
                    .extend(collect_inherent_members(siblings, &declaration.name));
                trace!(
                    "Evaluating `{}` at {} with {} member(s)",
                    declaration.name,
                    anchor,
                    declaration.members.len()
                );
                evaluate_rust(&declaration, anchor)
            }
            None => Outcome::Rejected(Diagnostic::new(
                DiagnosticKind::IneligibleKind,
                DEFAULT_MARKER,
                anchor,
            )),
        };

        match outcome {
            Outcome::Synthesized(fragments) => {
                // Only structs lower to an eligible kind.
                let Item::Struct(item_struct) = item else {
                    return;
                };
                info!("Generating `{}::{}`", item_struct.ident, CONSTRUCTOR_NAME);
                let at = self.insertion_offset(item_struct, siblings);
                let replacement = fragments
                    .iter()
                    .map(|fragment| self.render_fragment(fragment, item_struct))
                    .collect::<String>();
                self.edits.push(Edit {
                    range: at..at,
                    replacement,
                });
                self.expanded += 1;
            }
            Outcome::Redundant(diagnostic) | Outcome::Rejected(diagnostic) => {
                self.diagnostics.push(diagnostic);
            }
        }
    }

    /// Generated members go after the type's last inherent `impl` in the same
    /// module, or right after the type when there is none below it.
    fn insertion_offset(&self, item: &ItemStruct, siblings: &[Item]) -> usize {
        let name = item.ident.to_string();
        siblings
            .iter()
            .filter_map(|sibling| match sibling {
                Item::Impl(item_impl)
                    if item_impl.trait_.is_none()
                        && type_name(&item_impl.self_ty).as_deref() == Some(name.as_str()) =>
                {
                    Some(self.text.offset(item_impl.span().end()))
                }
                _ => None,
            })
            .fold(self.text.offset(item.span().end()), usize::max)
    }

    /// The attribute text, plus its whole line when nothing else is on it.
    fn attribute_removal_range(&self, attr: &Attribute) -> Range<usize> {
        let source = self.text.as_str();
        let span = attr.span();
        let start = self.text.offset(span.start());
        let end = self.text.offset(span.end());

        let line_start = source[..start].rfind('\n').map_or(0, |index| index + 1);
        let rest = &source[end..];
        let line_end = rest.find('\n');
        let leading = &source[line_start..start];
        let trailing = &rest[..line_end.unwrap_or(rest.len())];

        if leading.trim().is_empty() && trailing.trim().is_empty() {
            line_start..line_end.map_or(source.len(), |index| end + index + 1)
        } else {
            let spaces = rest.len() - rest.trim_start_matches([' ', '\t']).len();
            start..end + spaces
        }
    }

    fn render_fragment(&self, fragment: &GeneratedFragment, item: &ItemStruct) -> String {
        let indent = self.text.indent(item.span().start().line);
        let vis = if fragment.is_public() { "pub " } else { "" };
        let body = default_construction_source(&item.fields, &format!("{indent}        "));

        format!(
            "\n\n{indent}{header} {{\n{indent}    {vis}fn {CONSTRUCTOR_NAME}() -> Self {{\n{body}\n{indent}    }}\n{indent}}}",
            header = self.impl_header(item),
        )
    }

    /// `impl<..> Name<..> where ..`, with generic parameters copied from the
    /// source minus their defaults.
    fn impl_header(&self, item: &ItemStruct) -> String {
        let generics = &item.generics;
        let mut header = String::from("impl");

        if !generics.params.is_empty() {
            let params: Vec<&str> = generics
                .params
                .iter()
                .map(|param| self.generic_param_source(param))
                .collect();
            header.push('<');
            header.push_str(&params.join(", "));
            header.push('>');
        }

        header.push(' ');
        header.push_str(&item.ident.to_string());

        if !generics.params.is_empty() {
            let args: Vec<String> = generics
                .params
                .iter()
                .map(|param| match param {
                    GenericParam::Type(param) => param.ident.to_string(),
                    GenericParam::Lifetime(param) => param.lifetime.to_string(),
                    GenericParam::Const(param) => param.ident.to_string(),
                })
                .collect();
            header.push('<');
            header.push_str(&args.join(", "));
            header.push('>');
        }

        if let Some(where_clause) = &generics.where_clause {
            let clause = self
                .text
                .slice(where_clause.span())
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            header.push(' ');
            header.push_str(clause.trim_end_matches(','));
        }

        header
    }

    fn generic_param_source(&self, param: &GenericParam) -> &str {
        let (span, eq_token) = match param {
            GenericParam::Type(param) => (param.span(), param.eq_token.as_ref().map(|eq| eq.span())),
            GenericParam::Const(param) => (param.span(), param.eq_token.as_ref().map(|eq| eq.span())),
            GenericParam::Lifetime(param) => (param.span(), None),
        };
        match eq_token {
            Some(eq) => self.text.slice_between(span.start(), eq.start()).trim_end(),
            None => self.text.slice(span),
        }
    }
}

fn default_construction_source(fields: &Fields, indent: &str) -> String {
    match fields {
        Fields::Named(fields) if fields.named.is_empty() => format!("{indent}Self {{}}"),
        Fields::Named(fields) => {
            let assignments = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .map(|ident| format!("{indent}    {ident}: Default::default(),\n"))
                .collect::<String>();
            format!("{indent}Self {{\n{assignments}{indent}}}")
        }
        Fields::Unnamed(fields) => {
            let defaults = vec!["Default::default()"; fields.unnamed.len()];
            format!("{indent}Self({})", defaults.join(", "))
        }
        Fields::Unit => format!("{indent}Self"),
    }
}
