use serde::Serialize;

use super::node::ExplorationNode;

/// Attribute bag handed to the renderer for a single node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderAttributes {
    pub current_sum: i64,
    /// `current_subset` joined with `", "`.
    pub subset: String,
    pub selected: bool,
    pub considered: bool,
    pub level: usize,
    pub is_target: bool,
}

/// Labeled tree shape consumed by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub name: String,
    pub id: String,
    pub attributes: RenderAttributes,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Projects an exploration tree into the renderer's shape.
    pub fn from_tree(root: Option<&ExplorationNode>) -> Option<Self> {
        root.map(Self::project)
    }

    fn project(node: &ExplorationNode) -> Self {
        Self {
            name: node.name.clone(),
            id: format!("node-{}", node.id),
            attributes: RenderAttributes {
                current_sum: node.current_sum,
                subset: node.subset_label(),
                selected: node.selected,
                considered: node.considered,
                level: node.level,
                is_target: node.is_target,
            },
            children: node.children.iter().map(Self::project).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_subsets;

    #[test]
    fn none_projects_to_none() {
        assert!(RenderNode::from_tree(None).is_none());
    }

    #[test]
    fn projection_mirrors_tree() {
        let outcome = find_subsets(&[2, 3], 5);
        let render = RenderNode::from_tree(Some(&outcome.tree)).unwrap();
        assert_eq!(render.id, "node-0");
        assert_eq!(render.children.len(), 2);
        let include_three = &render.children[0].children[0];
        assert_eq!(include_three.name, "Include 3");
        assert_eq!(include_three.attributes.subset, "2, 3");
        assert!(include_three.attributes.is_target);
        assert_eq!(include_three.attributes.level, 2);
    }

    #[test]
    fn serializes_attribute_names() {
        let outcome = find_subsets(&[], 0);
        let render = RenderNode::from_tree(Some(&outcome.tree)).unwrap();
        let json = serde_json::to_value(&render).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Root",
                "id": "node-0",
                "attributes": {
                    "currentSum": 0,
                    "subset": "",
                    "selected": false,
                    "considered": true,
                    "level": 0,
                    "isTarget": true
                },
                "children": []
            })
        );
    }
}
