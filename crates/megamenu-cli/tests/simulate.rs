//! Integration tests for script replay and view tables.

use megamenu_cli::script::{Event, Simulation};
use megamenu_cli::summary::{RowState, state_line, view_rows};
use megamenu_core::{MegaMenu, StaticSource};
use megamenu_model::{GlobalConfig, MenuNode, MenuTree, Orientation};

fn source() -> StaticSource {
    StaticSource::new(MenuTree::new(vec![
        MenuNode::new("1", "Shoes", "shoes").with_children(vec![
            MenuNode::new("11", "Sneakers", "shoes/sneakers")
                .with_children(vec![MenuNode::new("111", "Running", "https://shop.test//running")]),
            MenuNode::new("12", "Socks", "shoes/socks"),
        ]),
        MenuNode::new("2", "Bags", "bags"),
    ]))
}

fn config(orientation: Orientation) -> GlobalConfig {
    GlobalConfig {
        open_only: Some(orientation),
        ..GlobalConfig::default()
    }
}

fn replay(orientation: Orientation, script: &[&str]) -> String {
    let menu = MegaMenu::mount(&source(), config(orientation), "https://shop.test").unwrap();
    let mut simulation = Simulation::new(menu);
    let mut lines = Vec::new();
    for raw in script {
        let event: Event = raw.parse().unwrap();
        let outcome = simulation.apply(&event);
        let state = state_line(simulation.menu().store().borrow().state());
        lines.push(format!("{event} -> {outcome} | {state}"));
    }
    simulation.finish();
    assert_eq!(simulation.listener_count(), 0);
    lines.join("\n")
}

#[test]
fn horizontal_script() {
    let transcript = replay(
        Orientation::Horizontal,
        &[
            "trigger",
            "enter:1",
            "enter:2",
            "leave",
            "enter:1",
            "click:111",
            "trigger",
            "outside",
        ],
    );
    insta::assert_snapshot!(transcript, @r"
    trigger -> menu opened | menu=open active=- open=-/-
    enter:1 -> active 1 | menu=open active=1 open=-/-
    enter:2 -> active 2 | menu=open active=2 open=-/-
    leave -> active cleared | menu=open active=- open=-/-
    enter:1 -> active 1 | menu=open active=1 open=-/-
    click:111 -> navigate https://shop.test/running | menu=closed active=1 open=-/-
    trigger -> menu opened | menu=open active=1 open=-/-
    outside -> outside click | menu=closed active=1 open=-/-
    ");
}

#[test]
fn vertical_script() {
    let transcript = replay(
        Orientation::Vertical,
        &[
            "click:1",
            "click:11",
            "click:12",
            "enter:2",
            "click:2",
            "click:1",
            "click:1",
        ],
    );
    insta::assert_snapshot!(transcript, @r"
    click:1 -> opened 1 | menu=closed active=1 open=1/-
    click:11 -> opened 11 | menu=closed active=1 open=1/11
    click:12 -> navigate https://shop.test/shoes/socks | menu=closed active=1 open=1/11
    enter:2 -> ignored (vertical menus do not track hover) | menu=closed active=1 open=1/11
    click:2 -> navigate https://shop.test/bags | menu=closed active=1 open=1/11
    click:1 -> closed 1 | menu=closed active=- open=-/-
    click:1 -> opened 1 | menu=closed active=1 open=1/-
    ");
}

#[test]
fn vertical_rows_follow_the_accordion() {
    let mut menu = MegaMenu::mount(
        &source(),
        config(Orientation::Vertical),
        "https://shop.test",
    )
    .unwrap();
    let vertical = menu.presenter_mut().as_vertical_mut().unwrap();
    vertical.click("1");
    vertical.click("11");

    let rows: Vec<(usize, String, RowState)> = view_rows(&menu.view())
        .into_iter()
        .map(|row| (row.depth, row.name, row.state))
        .collect();
    assert_eq!(
        rows,
        vec![
            (0, "Shoes".to_string(), RowState::Open),
            (1, "All Shoes".to_string(), RowState::SeeAll),
            (1, "Sneakers".to_string(), RowState::Open),
            (2, "All Sneakers".to_string(), RowState::SeeAll),
            (2, "Running".to_string(), RowState::Link),
            (1, "Socks".to_string(), RowState::Link),
            (0, "Bags".to_string(), RowState::Link),
        ]
    );
}

#[test]
fn horizontal_rows_nest_the_panel_under_the_active_department() {
    let mut menu = MegaMenu::mount(
        &source(),
        config(Orientation::Horizontal),
        "https://shop.test",
    )
    .unwrap();
    menu.presenter_mut()
        .as_horizontal_mut()
        .unwrap()
        .pointer_enter("1");

    let rows = view_rows(&menu.view());
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "11", "111", "12", "2"]);
    assert_eq!(rows[0].state, RowState::Active);
    assert_eq!(rows[2].url.as_deref(), Some("https://shop.test/running"));
}
