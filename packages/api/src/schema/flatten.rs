//! Depth-first flattening of the component tree into an ordered list of
//! leaf data fields.

use super::{ColumnGroup, Component};

/// A leaf data-entry point. The key becomes the column name in the
/// dedicated submission table, the kind drives the column type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: String,
    pub kind: String,
}

/// Flattens a component tree left-to-right, depth-first, so that the output
/// order matches the visual order of the form. `columns` containers
/// contribute their column groups in order; `panel`, `fieldset` and
/// `datagrid` containers contribute their nested components directly.
///
/// Buttons never carry data and are excluded. Leaves without a key cannot
/// become columns and are skipped rather than failing the whole schema.
pub fn flatten(components: &[Component]) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    collect(components, &mut fields);
    fields
}

fn collect(components: &[Component], out: &mut Vec<FieldDescriptor>) {
    for component in components {
        match component.kind.as_str() {
            "columns" => {
                for ColumnGroup { components } in &component.columns {
                    collect(components, out);
                }
            }
            "panel" | "fieldset" | "datagrid" => collect(&component.components, out),
            "button" => {}
            kind => {
                if let Some(key) = &component.key {
                    out.push(FieldDescriptor {
                        key: key.clone(),
                        kind: kind.to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: &str, key: &str) -> Component {
        Component {
            kind: kind.to_string(),
            key: Some(key.to_string()),
            components: Vec::new(),
            columns: Vec::new(),
        }
    }

    fn container(kind: &str, components: Vec<Component>) -> Component {
        Component {
            kind: kind.to_string(),
            key: None,
            components,
            columns: Vec::new(),
        }
    }

    fn columns(groups: Vec<Vec<Component>>) -> Component {
        Component {
            kind: "columns".to_string(),
            key: None,
            components: Vec::new(),
            columns: groups
                .into_iter()
                .map(|components| ColumnGroup { components })
                .collect(),
        }
    }

    fn keys(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn nested_containers_flatten_in_visual_order() {
        let tree = vec![container(
            "panel",
            vec![
                leaf("textfield", "fieldA"),
                columns(vec![
                    vec![leaf("textfield", "fieldB")],
                    vec![leaf("textfield", "fieldC")],
                ]),
            ],
        )];

        assert_eq!(keys(&flatten(&tree)), vec!["fieldA", "fieldB", "fieldC"]);
    }

    #[test]
    fn buttons_are_excluded() {
        let tree = vec![
            leaf("textfield", "name"),
            leaf("button", "submit"),
            container("fieldset", vec![leaf("button", "reset"), leaf("email", "email")]),
        ];

        assert_eq!(keys(&flatten(&tree)), vec!["name", "email"]);
    }

    #[test]
    fn datagrid_recurses_into_components() {
        let tree = vec![container(
            "datagrid",
            vec![leaf("textfield", "item"), leaf("number", "qty")],
        )];

        assert_eq!(keys(&flatten(&tree)), vec!["item", "qty"]);
    }

    #[test]
    fn empty_columns_container_contributes_nothing() {
        let tree = vec![columns(vec![]), leaf("textfield", "after")];

        assert_eq!(keys(&flatten(&tree)), vec!["after"]);
    }

    #[test]
    fn keyless_leaves_are_skipped() {
        let tree = vec![
            Component {
                kind: "content".to_string(),
                key: None,
                components: Vec::new(),
                columns: Vec::new(),
            },
            leaf("textfield", "name"),
        ];

        assert_eq!(keys(&flatten(&tree)), vec!["name"]);
    }

    #[test]
    fn field_kinds_are_preserved() {
        let tree = vec![leaf("number", "age"), leaf("checkbox", "optIn")];
        let fields = flatten(&tree);

        assert_eq!(fields[0].kind, "number");
        assert_eq!(fields[1].kind, "checkbox");
    }
}
