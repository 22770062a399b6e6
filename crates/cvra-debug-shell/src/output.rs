//! Rendering of parameter trees and poses for the operator.
//!
//! Tree rendering is pure and deterministic: tree order as received is
//! display order, and the output shape is one line per node plus one line
//! per leaf, whatever the depth or branching.

use cvra_debug_proto::ParamNode;

use crate::client::Pose;

/// One indent level.
const INDENT: &str = "  ";

/// Render a parameter tree as indented text, starting at `indent` levels.
///
/// Prints `name:` for the node, then each leaf as `name: value` one level
/// deeper, then recurses into each child one level deeper. Children and
/// leaves are never reordered.
#[must_use]
pub fn render_tree(node: &ParamNode, indent: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, node, indent);
    out
}

fn render_into(out: &mut String, node: &ParamNode, indent: usize) {
    let pad = INDENT.repeat(indent);
    out.push_str(&pad);
    out.push_str(&node.name);
    out.push_str(":\n");
    for leaf in &node.values {
        out.push_str(&format!("{pad}{INDENT}{}: {}\n", leaf.name, leaf.value));
    }
    for child in &node.children {
        render_into(out, child, indent + 1);
    }
}

/// Format a pose as `x, y, heading`, three decimal digits each.
///
/// This is the only place where the heading leaves radians.
#[must_use]
pub fn format_position(pose: &Pose) -> String {
    format!(
        "{:.3}, {:.3}, {:.3}",
        pose.x,
        pose.y,
        pose.heading_rad.to_degrees()
    )
}

#[cfg(test)]
mod tests {
    use cvra_debug_proto::{ParamLeaf, ParamValue};

    use super::*;

    fn two_level_tree() -> ParamNode {
        ParamNode {
            name: "root".into(),
            values: vec![ParamLeaf {
                name: "a".into(),
                value: ParamValue::Integer(3),
            }],
            children: vec![ParamNode {
                name: "child".into(),
                values: vec![ParamLeaf {
                    name: "b".into(),
                    value: ParamValue::Scalar(1.5),
                }],
                children: vec![],
            }],
        }
    }

    #[test]
    fn renders_two_level_tree() {
        let expected = "root:\n  a: 3\n  child:\n    b: 1.5000\n";
        assert_eq!(render_tree(&two_level_tree(), 0), expected);
    }

    #[test]
    fn render_honors_starting_indent() {
        let node = ParamNode {
            name: "ns".into(),
            values: vec![ParamLeaf {
                name: "flag".into(),
                value: ParamValue::Bool(false),
            }],
            children: vec![],
        };
        assert_eq!(render_tree(&node, 2), "    ns:\n      flag: false\n");
    }

    #[test]
    fn renders_unsupported_marker_without_failing() {
        let node = ParamNode {
            name: "root".into(),
            values: vec![ParamLeaf {
                name: "mystery".into(),
                value: ParamValue::Unsupported,
            }],
            children: vec![],
        };
        let rendered = render_tree(&node, 0);
        assert!(rendered.contains("mystery: (unsupported value)"));
    }

    #[test]
    fn formats_position_in_degrees() {
        let pose = Pose {
            x: 1.0,
            y: 2.0,
            heading_rad: std::f64::consts::FRAC_PI_2,
        };
        assert_eq!(format_position(&pose), "1.000, 2.000, 90.000");
    }

    #[test]
    fn formats_negative_heading() {
        let pose = Pose {
            x: -0.5,
            y: 0.0,
            heading_rad: -std::f64::consts::PI,
        };
        assert_eq!(format_position(&pose), "-0.500, 0.000, -180.000");
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn arb_value() -> impl Strategy<Value = ParamValue> {
            prop_oneof![
                any::<i64>().prop_map(ParamValue::Integer),
                any::<f64>().prop_map(ParamValue::Scalar),
                any::<bool>().prop_map(ParamValue::Bool),
                Just(ParamValue::Unsupported),
            ]
        }

        fn arb_leaf() -> impl Strategy<Value = ParamLeaf> {
            ("[a-z]{1,8}", arb_value()).prop_map(|(name, value)| ParamLeaf { name, value })
        }

        fn arb_node() -> impl Strategy<Value = ParamNode> {
            let flat = ("[a-z]{1,8}", prop::collection::vec(arb_leaf(), 0..4)).prop_map(
                |(name, values)| ParamNode {
                    name,
                    values,
                    children: vec![],
                },
            );
            flat.prop_recursive(4, 32, 3, |inner| {
                (
                    "[a-z]{1,8}",
                    prop::collection::vec(arb_leaf(), 0..4),
                    prop::collection::vec(inner, 0..3),
                )
                    .prop_map(|(name, values, children)| ParamNode {
                        name,
                        values,
                        children,
                    })
            })
        }

        proptest! {
            // One line per node plus one per leaf, independent of depth
            // or branching.
            #[test]
            fn line_count_equals_nodes_plus_leaves(node in arb_node()) {
                let rendered = render_tree(&node, 0);
                prop_assert_eq!(
                    rendered.lines().count(),
                    node.node_count() + node.leaf_count()
                );
            }

            #[test]
            fn rendering_is_deterministic(node in arb_node()) {
                prop_assert_eq!(render_tree(&node, 0), render_tree(&node, 0));
            }
        }
    }
}
