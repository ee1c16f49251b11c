//! Plain-text rendering of the materialized connection list.

use constellation::{Canvas, ConnectionLine};

/// Renders the canvas summary and connection list as a text report.
///
/// One line per diagram, one line per connection; shared connections print
/// their shared-label count, subset connections print an arrow from the
/// superset diagram.
pub fn render(canvas: &Canvas, connections: &[ConnectionLine]) -> String {
    let mut out = String::new();

    let visible = canvas.diagrams().filter(|diagram| diagram.visible()).count();
    out.push_str(&format!(
        "diagrams ({} loaded, {visible} visible):\n",
        canvas.len()
    ));
    for diagram in canvas.diagrams() {
        let label_count = diagram.labels().len();
        let marker = if diagram.visible() { "" } else { "  [hidden]" };
        out.push_str(&format!(
            "  {}  {label_count} label{}{marker}\n",
            diagram.id(),
            plural(label_count)
        ));
    }

    out.push_str(&format!("\nconnections ({}):\n", connections.len()));
    if connections.is_empty() {
        out.push_str("  none\n");
        return out;
    }

    for line in connections {
        match line {
            ConnectionLine::Shared { a, b, shared_count } => {
                out.push_str(&format!(
                    "  {} -- {}  {shared_count} shared label{}\n",
                    a.id,
                    b.id,
                    plural(*shared_count)
                ));
            }
            ConnectionLine::Subset { from, to } => {
                out.push_str(&format!("  {} -> {}  subset\n", from.id, to.id));
            }
        }
    }

    out
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
