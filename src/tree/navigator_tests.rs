//! Unit tests for the tree navigator

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::backend::MemoryBackend;
    use crate::columns::PlaceholderRenderer;
    use crate::config::{ColumnDef, ColumnSpec, Configuration};
    use crate::error::BrowserError;
    use crate::testing::sample_tree;
    use crate::tree::TreeNavigator;

    fn sample_config() -> Configuration {
        Configuration::new("pages", "Pages")
            .with_selection_bounds(Some(1), Some(3))
            .with_columns(vec![ColumnDef {
                id: "name".to_string(),
                spec: ColumnSpec::ValueProvider("name".to_string()),
            }])
    }

    fn ids(children: &[Value]) -> Vec<&str> {
        children
            .iter()
            .map(|child| child["id"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_tree_config_metadata() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let tree_config = navigator.tree_config().unwrap();
        assert_eq!(tree_config.name, "Pages");
        assert_eq!(tree_config.min_selected, Some(1));
        assert_eq!(tree_config.max_selected, Some(3));
        assert_eq!(tree_config.default_columns, vec!["name"]);

        let catalog: Vec<(&str, &str)> = tree_config
            .available_columns
            .iter()
            .map(|column| (column.id.as_str(), column.label.as_str()))
            .collect();
        assert_eq!(catalog, vec![("name", "Name"), ("type", "Type")]);
    }

    #[test]
    fn test_tree_config_roots_annotated_with_existence_flags() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let tree_config = navigator.tree_config().unwrap();
        assert_eq!(tree_config.root_locations.len(), 1);

        let root = &tree_config.root_locations[0];
        assert_eq!(root["id"], "root");
        assert_eq!(root["has_children"], true);
        assert_eq!(root["has_children_categories"], true);
    }

    #[test]
    fn test_root_locations_never_claim_a_parent() {
        let mut backend = sample_tree();
        backend.scope_roots(vec!["news".to_string()]);
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        // news natively sits under root, but as a session root its
        // serialized parent must be null
        let tree_config = navigator.tree_config().unwrap();
        let root = &tree_config.root_locations[0];
        assert_eq!(root["id"], "news");
        assert_eq!(root["parent_id"], Value::Null);
    }

    #[test]
    fn test_children_of_location() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("root").unwrap();
        assert_eq!(ids(&list.children), vec!["news", "media"]);

        let news = &list.children[0];
        assert_eq!(news["parent_id"], "root");
        assert_eq!(news["has_children"], true);
        assert_eq!(news["enabled"], true);

        let media = &list.children[1];
        assert_eq!(media["has_children"], false);
        assert_eq!(media["enabled"], false);
    }

    #[test]
    fn test_categories_of_location() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.categories("root").unwrap();
        assert_eq!(ids(&list.children), vec!["archive"]);
        assert_eq!(list.children[0]["has_children"], false);
    }

    #[test]
    fn test_children_and_categories_are_disjoint() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let children = navigator.children("root").unwrap();
        let categories = navigator.categories("root").unwrap();
        let child_ids = ids(&children.children);
        for id in ids(&categories.children) {
            assert!(!child_ids.contains(&id));
        }
    }

    #[test]
    fn test_path_excludes_location_itself_and_preserves_order() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("articles").unwrap();
        let path_ids: Vec<&str> = list.path.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(path_ids, vec!["root", "news"]);
        assert_eq!(list.truncated_ancestors, 0);
    }

    #[test]
    fn test_path_truncates_out_of_root_ancestors() {
        let mut backend = sample_tree();
        backend.scope_roots(vec!["news".to_string()]);
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("articles").unwrap();
        let path_ids: Vec<&str> = list.path.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(path_ids, vec!["news"]);
        assert_eq!(list.truncated_ancestors, 1);
    }

    #[test]
    fn test_unknown_location_fails_not_found() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        assert!(matches!(
            navigator.children("nope").unwrap_err(),
            BrowserError::NotFound(_)
        ));
        assert!(matches!(
            navigator.categories("nope").unwrap_err(),
            BrowserError::NotFound(_)
        ));
    }

    #[test]
    fn test_extra_columns_merged_without_overriding_standard_fields() {
        let mut backend = sample_tree();
        // A backend column colliding with a standard field must lose
        backend.set_column("news", "name", "Shadowed");
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("root").unwrap();
        let news = &list.children[0];
        assert_eq!(news["name"], "News");
        assert_eq!(news["type"], "folder");
    }

    #[test]
    fn test_html_rendered_from_configured_template() {
        let backend = sample_tree();
        let config = sample_config().with_template("<li>{name}</li>");
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("root").unwrap();
        assert_eq!(list.children[0]["html"], "<li>News</li>");
    }

    #[test]
    fn test_html_empty_without_template() {
        let backend = sample_tree();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let list = navigator.children("root").unwrap();
        assert_eq!(list.children[0]["html"], "");
    }

    #[test]
    fn test_empty_backend_has_empty_root_set() {
        let backend = MemoryBackend::new();
        let config = sample_config();
        let navigator = TreeNavigator::new(&backend, &config, &PlaceholderRenderer);

        let tree_config = navigator.tree_config().unwrap();
        assert!(tree_config.root_locations.is_empty());
    }
}
