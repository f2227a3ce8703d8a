// bodies/hierarchy.rs
//
// Body hierarchy: explicit parent/child links derived from the parameter table.
// Replaces positional "first few bodies nest, the rest are flat" conventions.
//
// Usage:
//   let hierarchy = BodyHierarchy::from_table(&table);
//   for step in hierarchy.traversal() { ... }   // depth-first, parents before children

use crate::api::types::BodyId;
use crate::bodies::table::OrbitalParameterTable;

/// Node in the body hierarchy.
#[derive(Debug, Clone, Default)]
struct HierarchyNode {
    parent: Option<BodyId>,
    children: Vec<BodyId>,
}

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStep {
    pub id: BodyId,
    /// 0 for roots, 1 for their satellites, and so on.
    pub depth: usize,
}

/// Parent/child relationships for every body in a table.
///
/// Children are stored in table order, so the depth-first walk visits each
/// planet immediately followed by its satellites.
#[derive(Debug, Clone, Default)]
pub struct BodyHierarchy {
    nodes: Vec<HierarchyNode>,
    /// Bodies with no parent, in table order.
    roots: Vec<BodyId>,
}

impl BodyHierarchy {
    pub fn from_table(table: &OrbitalParameterTable) -> Self {
        let mut nodes = vec![HierarchyNode::default(); table.len()];
        let mut roots = Vec::new();

        for (id, body) in table.iter() {
            nodes[id.index()].parent = body.parent;
            match body.parent {
                Some(parent) => nodes[parent.index()].children.push(id),
                None => roots.push(id),
            }
        }

        Self { nodes, roots }
    }

    pub fn roots(&self) -> &[BodyId] {
        &self.roots
    }

    /// Parent of `id`. Panics on an unknown id.
    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.nodes[id.index()].parent
    }

    /// Direct children of `id`. Panics on an unknown id.
    pub fn children(&self, id: BodyId) -> &[BodyId] {
        &self.nodes[id.index()].children
    }

    pub fn is_root(&self, id: BodyId) -> bool {
        self.parent(id).is_none()
    }

    /// Whether `id` orbits a root directly (planets, not moons).
    pub fn orbits_root(&self, id: BodyId) -> bool {
        self.parent(id).is_some_and(|p| self.is_root(p))
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: BodyId) -> Vec<BodyId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            chain.push(p);
            current = self.parent(p);
        }
        chain
    }

    /// Depth-first order: each root, then each child subtree in table order.
    pub fn traversal(&self) -> Vec<TraversalStep> {
        let mut steps = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.walk(root, 0, &mut steps);
        }
        steps
    }

    fn walk(&self, id: BodyId, depth: usize, steps: &mut Vec<TraversalStep>) {
        steps.push(TraversalStep { id, depth });
        for &child in self.children(id) {
            self.walk(child, depth + 1, steps);
        }
    }

    /// Number of bodies in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
