//! Walks a parsed DOT statement tree and collects `label` attribute values.

use dot_structures::{
    Attribute, EdgeTy, Graph, GraphAttributes, Id as DotId, Stmt, Subgraph, Vertex,
};
use log::trace;

use constellation_core::{identifier::Id, label::LabelSet};

use crate::error::ExtractError;

/// Extracts the set of `label` attribute values declared by a DOT source.
///
/// Every structural item is visited: node and edge statements, subgraphs
/// (recursively, including subgraphs used as edge endpoints), bare attribute
/// statements, and `graph`/`node`/`edge` attribute-default statements.
/// Duplicate values collapse; insertion order is document order.
///
/// This function is deterministic and has no side effects.
///
/// # Errors
///
/// Returns [`ExtractError::Syntax`] when the source is not valid DOT. The
/// caller decides whether that is fatal; the canvas recovers by loading the
/// diagram with an empty label set.
///
/// # Examples
///
/// ```
/// use constellation_parser::extract_labels;
///
/// let labels = extract_labels(r#"digraph { a [label="API"]; b [label="DB"]; a -> b; }"#)
///     .expect("valid DOT");
/// assert_eq!(labels.len(), 2);
/// ```
pub fn extract_labels(source: &str) -> Result<LabelSet, ExtractError> {
    let graph = graphviz_rust::parse(source).map_err(ExtractError::Syntax)?;

    let mut labels = LabelSet::new();
    match &graph {
        Graph::Graph { stmts, .. } | Graph::DiGraph { stmts, .. } => {
            collect_stmts(stmts, &mut labels);
        }
    }

    trace!(label_count = labels.len(); "Extracted label set");
    Ok(labels)
}

fn collect_stmts(stmts: &[Stmt], labels: &mut LabelSet) {
    for stmt in stmts {
        match stmt {
            Stmt::Node(node) => collect_attributes(&node.attributes, labels),
            Stmt::Edge(edge) => {
                collect_attributes(&edge.attributes, labels);
                match &edge.ty {
                    EdgeTy::Pair(a, b) => {
                        collect_vertex(a, labels);
                        collect_vertex(b, labels);
                    }
                    EdgeTy::Chain(vertices) => {
                        for vertex in vertices {
                            collect_vertex(vertex, labels);
                        }
                    }
                }
            }
            Stmt::Subgraph(subgraph) => collect_subgraph(subgraph, labels),
            Stmt::Attribute(attribute) => collect_attribute(attribute, labels),
            Stmt::GAttribute(defaults) => match defaults {
                GraphAttributes::Graph(attributes)
                | GraphAttributes::Node(attributes)
                | GraphAttributes::Edge(attributes) => collect_attributes(attributes, labels),
            },
        }
    }
}

fn collect_subgraph(subgraph: &Subgraph, labels: &mut LabelSet) {
    collect_stmts(&subgraph.stmts, labels);
}

fn collect_vertex(vertex: &Vertex, labels: &mut LabelSet) {
    // Node endpoints carry no attributes of their own; subgraph endpoints
    // can declare labelled items inside their body.
    if let Vertex::S(subgraph) = vertex {
        collect_subgraph(subgraph, labels);
    }
}

fn collect_attributes(attributes: &[Attribute], labels: &mut LabelSet) {
    for attribute in attributes {
        collect_attribute(attribute, labels);
    }
}

fn collect_attribute(attribute: &Attribute, labels: &mut LabelSet) {
    let Attribute(key, value) = attribute;
    if dot_id_text(key) != "label" {
        return;
    }

    let value = dot_id_text(value);
    // `label=""` means "no label" in Graphviz.
    if !value.is_empty() {
        labels.insert(Id::new(&value));
    }
}

/// Returns the text content of a DOT identifier.
///
/// Escaped identifiers keep their surrounding quotes in the parse tree;
/// those are stripped and `\"` / `\\` sequences resolved. Other escape
/// sequences (`\n`, `\l`, ...) are Graphviz layout hints and pass through
/// verbatim. HTML-like values are taken as-is.
fn dot_id_text(id: &DotId) -> String {
    match id {
        DotId::Plain(text) | DotId::Html(text) | DotId::Anonymous(text) => text.clone(),
        DotId::Escaped(quoted) => unquote(quoted),
    }
}

fn unquote(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(quoted);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
