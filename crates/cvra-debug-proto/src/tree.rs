//! The decoded parameter tree.
//!
//! A list response carries a forest of [`crate::wire::ParameterNamespaceContent`]
//! trees; this module converts them into owned domain nodes, preserving the
//! protocol's order exactly. Display order is tree order as received, it is
//! not re-derivable and must never be sorted.

use crate::error::ProtoError;
use crate::value::ParamValue;
use crate::wire;

/// A leaf parameter attached directly to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamLeaf {
    /// Leaf name.
    pub name: String,
    /// Decoded value.
    pub value: ParamValue,
}

/// One node of the parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamNode {
    /// Namespace segment this node represents.
    pub name: String,
    /// Leaf values at this node, in protocol order.
    pub values: Vec<ParamLeaf>,
    /// Nested sub-namespaces, in protocol order.
    pub children: Vec<ParamNode>,
}

impl ParamNode {
    /// Decode one wire tree, recursively.
    #[must_use]
    pub fn from_wire(content: &wire::ParameterNamespaceContent) -> Self {
        Self {
            name: content.name.clone(),
            values: content
                .values
                .iter()
                .map(|v| ParamLeaf {
                    name: v.name.clone(),
                    value: ParamValue::from_wire(v),
                })
                .collect(),
            children: content.children.iter().map(Self::from_wire).collect(),
        }
    }

    /// Decode a full list response, consulting the first tree of the forest.
    ///
    /// The protocol allows multiple roots but the service is only ever
    /// observed to send one; extra roots are ignored rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ProtoError::EmptyForest`] if the response carries no tree
    /// at all, so a broken service surfaces as an error instead of a
    /// silently empty listing.
    pub fn from_response(response: &wire::ParameterListResponse) -> Result<Self, ProtoError> {
        response
            .contents
            .first()
            .map(Self::from_wire)
            .ok_or(ProtoError::EmptyForest)
    }

    /// Total number of nodes in this tree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Total number of leaf values in this tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.values.len() + self.children.iter().map(Self::leaf_count).sum::<usize>()
    }
}
