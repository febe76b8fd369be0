//! HTML table rendering for front matter trees
//!
//! Output is raw markup: cell text is not escaped here, so anything
//! returned to a caller has to go through [`crate::sanitize::Sanitizer`].
//!
//! Nested mappings become nested tables. A nested mapping in key position
//! always renders horizontally; in value position it follows the enclosing
//! layout. Existing rendered documents depend on this, so keep it.

use crate::core::layout::Layout;
use crate::core::node::{Mapping, Node};

const TABLE_OPEN: &str = r#"<table data="yaml-metadata">"#;

/// Separator between rendered sequence elements
pub const SEQUENCE_SEPARATOR: &str = ", ";

/// Render a mapping as a table in the given layout
pub fn render_table(mapping: &Mapping, layout: Layout) -> String {
    match layout {
        Layout::Horizontal => render_horizontal(mapping),
        Layout::Vertical => render_vertical(mapping),
    }
}

/// Header row of keys, one body row of values; empty mappings render nothing
fn render_horizontal(mapping: &Mapping) -> String {
    let mut thead = String::new();
    let mut tbody = String::new();

    for (key, value) in mapping.iter() {
        thead.push_str("<th>");
        push_node(&mut thead, key, Layout::Horizontal);
        thead.push_str("</th>");

        tbody.push_str("<td>");
        push_node(&mut tbody, value, Layout::Horizontal);
        tbody.push_str("</td>");
    }

    if thead.is_empty() {
        return String::new();
    }
    // No </tbody>: kept byte-compatible with previously rendered output
    format!(
        "{}<thead><tr>{}</tr></thead><tbody><tr>{}</tr></table>",
        TABLE_OPEN, thead, tbody
    )
}

/// One row per pair; an empty mapping still renders an empty table
fn render_vertical(mapping: &Mapping) -> String {
    let mut table = String::from(TABLE_OPEN);

    for (key, value) in mapping.iter() {
        table.push_str("<tr><td>");
        push_node(&mut table, key, Layout::Horizontal);
        table.push_str("</td><td>");
        push_node(&mut table, value, Layout::Vertical);
        table.push_str("</td></tr>");
    }

    table.push_str("</table>");
    table
}

fn push_node(out: &mut String, node: &Node, layout: Layout) {
    match node {
        Node::Scalar(scalar) => out.push_str(&scalar.to_string()),
        Node::Mapping(mapping) => out.push_str(&render_table(mapping, layout)),
        Node::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(SEQUENCE_SEPARATOR);
                }
                push_node(out, item, layout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Scalar;
    use pretty_assertions::assert_eq;

    fn yaml(text: &str) -> Mapping {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_vertical_single_pair() {
        assert_eq!(
            render_table(&yaml("name: x"), Layout::Vertical),
            r#"<table data="yaml-metadata"><tr><td>name</td><td>x</td></tr></table>"#
        );
    }

    #[test]
    fn test_horizontal_single_level() {
        assert_eq!(
            render_table(&yaml("a: 1\nb: two"), Layout::Horizontal),
            r#"<table data="yaml-metadata"><thead><tr><th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td>two</td></tr></table>"#
        );
    }

    #[test]
    fn test_empty_mapping_asymmetry() {
        let empty = Mapping::new();
        assert_eq!(render_table(&empty, Layout::Horizontal), "");
        assert_eq!(
            render_table(&empty, Layout::Vertical),
            r#"<table data="yaml-metadata"></table>"#
        );
    }

    #[test]
    fn test_row_and_cell_counts() {
        let mapping = yaml("a: 1\nb: 2\nc: 3\nd: 4");

        let vertical = render_table(&mapping, Layout::Vertical);
        assert_eq!(vertical.matches("<tr>").count(), 4);
        assert_eq!(vertical.matches("<table").count(), 1);

        let horizontal = render_table(&mapping, Layout::Horizontal);
        assert_eq!(horizontal.matches("<th>").count(), 4);
        assert_eq!(horizontal.matches("<td>").count(), 4);
        assert_eq!(horizontal.matches("<thead>").count(), 1);
    }

    #[test]
    fn test_horizontal_nested_value_stays_horizontal() {
        assert_eq!(
            render_table(&yaml("meta:\n  a: 1\n  b: 2"), Layout::Horizontal),
            concat!(
                r#"<table data="yaml-metadata"><thead><tr><th>meta</th></tr></thead><tbody><tr><td>"#,
                r#"<table data="yaml-metadata"><thead><tr><th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></table>"#,
                r#"</td></tr></table>"#
            )
        );
    }

    #[test]
    fn test_vertical_nested_value_stays_vertical() {
        assert_eq!(
            render_table(&yaml("meta:\n  a: 1"), Layout::Vertical),
            concat!(
                r#"<table data="yaml-metadata"><tr><td>meta</td><td>"#,
                r#"<table data="yaml-metadata"><tr><td>a</td><td>1</td></tr></table>"#,
                r#"</td></tr></table>"#
            )
        );
    }

    #[test]
    fn test_nested_key_is_always_horizontal() {
        let mapping = Mapping::from_pair(
            Node::Mapping(Mapping::from_pair(Node::string("k"), Node::int(1))),
            Node::string("v"),
        );
        assert_eq!(
            render_table(&mapping, Layout::Vertical),
            concat!(
                r#"<table data="yaml-metadata"><tr><td>"#,
                r#"<table data="yaml-metadata"><thead><tr><th>k</th></tr></thead><tbody><tr><td>1</td></tr></table>"#,
                r#"</td><td>v</td></tr></table>"#
            )
        );
    }

    #[test]
    fn test_scalar_forms() {
        assert_eq!(
            render_table(&yaml("n: -3\nf: 2.5\nb: true\nz: ~"), Layout::Vertical),
            concat!(
                r#"<table data="yaml-metadata">"#,
                "<tr><td>n</td><td>-3</td></tr>",
                "<tr><td>f</td><td>2.5</td></tr>",
                "<tr><td>b</td><td>true</td></tr>",
                "<tr><td>z</td><td></td></tr>",
                "</table>"
            )
        );
    }

    #[test]
    fn test_sequence_joined() {
        assert_eq!(
            render_table(&yaml("tags: [rust, yaml, 3]"), Layout::Vertical),
            r#"<table data="yaml-metadata"><tr><td>tags</td><td>rust, yaml, 3</td></tr></table>"#
        );
    }

    #[test]
    fn test_sequence_of_mappings_follows_layout() {
        let rendered = render_table(&yaml("people:\n  - name: a\n  - name: b"), Layout::Vertical);
        assert_eq!(
            rendered,
            concat!(
                r#"<table data="yaml-metadata"><tr><td>people</td><td>"#,
                r#"<table data="yaml-metadata"><tr><td>name</td><td>a</td></tr></table>"#,
                ", ",
                r#"<table data="yaml-metadata"><tr><td>name</td><td>b</td></tr></table>"#,
                r#"</td></tr></table>"#
            )
        );
    }

    #[test]
    fn test_duplicate_keys_rendered_in_order() {
        let mapping: Mapping = [
            (Node::string("a"), Node::int(1)),
            (Node::string("a"), Node::Scalar(Scalar::Bool(false))),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            render_table(&mapping, Layout::Horizontal),
            r#"<table data="yaml-metadata"><thead><tr><th>a</th><th>a</th></tr></thead><tbody><tr><td>1</td><td>false</td></tr></table>"#
        );
    }

    #[test]
    fn test_markup_not_escaped() {
        let rendered = render_table(&yaml("x: \"<b>bold</b>\""), Layout::Vertical);
        assert!(rendered.contains("<td><b>bold</b></td>"));
    }
}
