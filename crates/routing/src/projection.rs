//! Projection of a [`RouteTree`] onto nested router objects.
//!
//! A page registered on a node becomes an index child with an empty path, so
//! `/products` can render its own page while still hosting `/products/create`.

use crate::tree::{RouteLeaf, RouteNode, RouteTree};
use serde::Serialize;
use storedesk_api::{ComponentRef, LoaderRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteObject {
    pub path: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderRef>,
    /// Failures while loading or rendering this page stay inside it.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub error_boundary: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteObject>,
}

impl RouteObject {
    fn index(leaf: &RouteLeaf) -> Self {
        Self {
            path: String::new(),
            index: true,
            component: Some(leaf.component.clone()),
            loader: leaf.loader.clone(),
            error_boundary: true,
            children: Vec::new(),
        }
    }

    fn branch(node: &RouteNode) -> Self {
        let mut children = Vec::with_capacity(node.children().count() + 1);
        children.extend(node.leaf().map(RouteObject::index));
        children.extend(node.children().map(RouteObject::branch));
        Self {
            path: node.segment().to_string(),
            index: false,
            component: None,
            loader: None,
            error_boundary: false,
            children,
        }
    }
}

impl RouteTree {
    pub fn to_route_objects(&self) -> Vec<RouteObject> {
        let mut objects = Vec::new();
        objects.extend(self.root_leaf().map(RouteObject::index));
        objects.extend(self.children().map(RouteObject::branch));
        objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storedesk_plugin::RouteExtension;

    #[test]
    fn page_and_children_share_a_branch() {
        let routes = [
            RouteExtension::new("/products", "ProductList"),
            RouteExtension::new("/products/create", "ProductCreate").with_loader("regions"),
        ];
        let tree = RouteTree::assemble(&routes, None).unwrap();

        let json = serde_json::to_value(tree.to_route_objects()).unwrap();
        assert_eq!(
            json,
            json!([
                {
                    "path": "products",
                    "children": [
                        { "path": "", "index": true, "component": "ProductList", "error_boundary": true },
                        {
                            "path": "create",
                            "children": [
                                {
                                    "path": "",
                                    "index": true,
                                    "component": "ProductCreate",
                                    "loader": "regions",
                                    "error_boundary": true
                                }
                            ]
                        }
                    ]
                }
            ])
        );
    }

    #[test]
    fn root_page_is_a_top_level_index() {
        let routes = [RouteExtension::new("/", "Home")];
        let objects = RouteTree::assemble(&routes, None).unwrap().to_route_objects();
        assert_eq!(objects.len(), 1);
        assert!(objects[0].index);
        assert!(objects[0].children.is_empty());
    }
}
