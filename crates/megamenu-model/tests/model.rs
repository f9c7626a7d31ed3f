//! Tests for megamenu-model types.

use megamenu_model::{GlobalConfig, MenuNode, MenuTree, MenusResponse, Orientation, TreeLevel};

fn catalog() -> MenusResponse {
    MenusResponse {
        menus: vec![
            MenuNode::new("1", "Shoes", "shoes").with_children(vec![
                MenuNode::new("11", "Sneakers", "shoes/sneakers"),
                MenuNode::new("12", "Sandals", "shoes/sandals").hidden(),
            ]),
            MenuNode::new("2", "Bags", "bags"),
        ],
    }
}

#[test]
fn response_round_trips_through_json() {
    let response = catalog();
    let json = serde_json::to_string(&response).expect("serialize response");
    let round = MenusResponse::from_json(&json).expect("deserialize response");
    assert_eq!(round, response);
}

#[test]
fn leaf_serializes_with_upstream_names() {
    let node = MenuNode::new("2", "Bags", "bags");
    insta::assert_json_snapshot!(node, @r#"
    {
      "id": "2",
      "name": "Bags",
      "slug": "bags",
      "display": true,
      "enableSty": false,
      "menu": []
    }
    "#);
}

#[test]
fn missing_menus_key_is_an_empty_tree() {
    let tree = MenusResponse::from_json("{}").unwrap().into_tree();
    assert!(tree.is_empty());
    let tree = MenusResponse::from_json(r#"{"menus": null}"#)
        .unwrap()
        .into_tree();
    assert!(tree.is_empty());
}

#[test]
fn deep_nodes_get_nested_levels() {
    let tree = MenuTree::new(vec![MenuNode::new("a", "A", "a").with_children(vec![
        MenuNode::new("b", "B", "b").with_children(vec![MenuNode::new("c", "C", "c")
            .with_children(vec![MenuNode::new("d", "D", "d")])]),
    ])]);
    assert_eq!(tree.locate("c").unwrap().level, TreeLevel::SubCategory);
    assert_eq!(tree.locate("d").unwrap().level, TreeLevel::Nested(3));
    assert_eq!(tree.locate("d").unwrap().department_id, "a");
}

#[test]
fn config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("megamenu-model-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("menu.toml");
    std::fs::write(&toml_path, "openOnly = \"vertical\"\ntitle = \"Shop\"\n").unwrap();
    let config = GlobalConfig::load_from(&toml_path).unwrap();
    assert_eq!(config.orientation(), Orientation::Vertical);
    assert_eq!(config.title, "Shop");

    let json_path = dir.join("menu.json");
    std::fs::write(&json_path, r#"{"defaultDepartmentActive": "Bags"}"#).unwrap();
    let config = GlobalConfig::load_from(&json_path).unwrap();
    assert_eq!(config.orientation(), Orientation::Horizontal);
    assert_eq!(config.default_department_active.as_deref(), Some("Bags"));

    std::fs::remove_dir_all(&dir).unwrap();
}
