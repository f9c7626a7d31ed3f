//! Table rendering for derived menu views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use megamenu_core::NavigationState;
use megamenu_core::presenter::{
    HorizontalView, ItemView, MenuView, SeeAll, VerticalDepartment, VerticalView,
};

/// Row state shown in the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Link,
    Active,
    Open,
    Closed,
    /// A "see all" entry of an open node.
    SeeAll,
    /// No link and nothing to expand.
    Inert,
}

impl RowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Active => "active",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::SeeAll => "see all",
            Self::Inert => "-",
        }
    }
}

/// One flattened entry of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// 0 for departments, 1 for categories, 2 for sub-categories.
    pub depth: usize,
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub state: RowState,
}

impl ViewRow {
    fn item(depth: usize, item: &ItemView, state: RowState) -> Self {
        Self {
            depth,
            id: item.id.clone(),
            name: item.name.clone(),
            url: item.url.clone(),
            state,
        }
    }

    fn see_all(depth: usize, id: &str, see_all: &SeeAll) -> Self {
        Self {
            depth,
            id: id.to_string(),
            name: format!("All {}", see_all.name),
            url: Some(see_all.url.clone()),
            state: RowState::SeeAll,
        }
    }
}

/// Flatten a view into display rows, in render order.
pub fn view_rows(view: &MenuView) -> Vec<ViewRow> {
    match view {
        MenuView::Horizontal(view) => horizontal_rows(view),
        MenuView::Vertical(view) => vertical_rows(view),
    }
}

fn link_state(item: &ItemView) -> RowState {
    if item.url.is_some() {
        RowState::Link
    } else {
        RowState::Inert
    }
}

fn horizontal_rows(view: &HorizontalView) -> Vec<ViewRow> {
    let mut rows = Vec::new();
    for department in &view.departments {
        let active = view.active_department.as_deref() == Some(department.id.as_str());
        let state = if active {
            RowState::Active
        } else {
            link_state(department)
        };
        rows.push(ViewRow::item(0, department, state));

        let Some(panel) = view.panel.as_ref().filter(|panel| panel.department_id == department.id)
        else {
            continue;
        };
        for category in &panel.categories {
            rows.push(ViewRow::item(1, &category.header, link_state(&category.header)));
            rows.extend(
                category
                    .subcategories
                    .iter()
                    .map(|sub| ViewRow::item(2, sub, link_state(sub))),
            );
        }
    }
    rows
}

fn vertical_rows(view: &VerticalView) -> Vec<ViewRow> {
    let mut rows = Vec::new();
    for department in &view.departments {
        push_department(&mut rows, department);
    }
    rows
}

fn accordion_state(item: &ItemView, open: bool) -> RowState {
    match (item.accordion, open) {
        (true, true) => RowState::Open,
        (true, false) => RowState::Closed,
        (false, _) => link_state(item),
    }
}

fn push_department(rows: &mut Vec<ViewRow>, department: &VerticalDepartment) {
    rows.push(ViewRow::item(
        0,
        &department.item,
        accordion_state(&department.item, department.open),
    ));
    if let Some(see_all) = &department.see_all {
        rows.push(ViewRow::see_all(1, &department.item.id, see_all));
    }
    for category in &department.categories {
        rows.push(ViewRow::item(
            1,
            &category.item,
            accordion_state(&category.item, category.open),
        ));
        if let Some(see_all) = &category.see_all {
            rows.push(ViewRow::see_all(2, &category.item.id, see_all));
        }
        rows.extend(
            category
                .subcategories
                .iter()
                .map(|sub| ViewRow::item(2, sub, link_state(sub))),
        );
    }
}

/// Build the view table printed by `megamenu render`.
pub fn view_table(view: &MenuView) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Menu"),
        header_cell("Id"),
        header_cell("Link"),
        header_cell("State"),
    ]);
    apply_table_style(&mut table);
    for row in view_rows(view) {
        let indent = "  ".repeat(row.depth);
        let name = Cell::new(format!("{indent}{}", row.name));
        let name = if row.depth == 0 {
            name.add_attribute(Attribute::Bold)
        } else {
            name
        };
        table.add_row(vec![
            name,
            dim_cell(&row.id),
            Cell::new(row.url.as_deref().unwrap_or("-")),
            state_cell(row.state),
        ]);
    }
    table
}

/// One-line description of the store state, printed by `megamenu simulate`.
pub fn state_line(state: &NavigationState) -> String {
    format!(
        "menu={} active={} open={}/{}",
        if state.is_menu_open() { "open" } else { "closed" },
        state.active_department_id().unwrap_or("-"),
        state.open_department().unwrap_or("-"),
        state.open_category().unwrap_or("-"),
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn state_cell(state: RowState) -> Cell {
    let cell = Cell::new(state.as_str());
    match state {
        RowState::Active | RowState::Open => cell.fg(Color::Green),
        RowState::Closed => cell.fg(Color::Yellow),
        RowState::SeeAll => cell.fg(Color::Blue),
        RowState::Link | RowState::Inert => cell,
    }
}
