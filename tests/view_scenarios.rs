//! End-to-end key sequences through the public view and component API.

use ratatui::layout::Size;

use stockpile::core::config::DisplaySettings;
use stockpile::core::inventory::{DataSource, Inventory};
use stockpile::core::product::Product;
use stockpile::tui::component::Component;
use stockpile::tui::components::{Column, NumericField, Row, Table};
use stockpile::tui::editor::{EditOutcome, InputKind, ModalEditor};
use stockpile::tui::event::Key;
use stockpile::tui::focus::FocusGroup;
use stockpile::tui::views::picker::TABLE;
use stockpile::tui::views::router::{SHOW_PRODUCTS, UPDATE_PRODUCT};
use stockpile::tui::views::show_products::ShowProductsView;
use stockpile::tui::views::{Transition, View, ViewContext, ViewSession};

fn product(i: usize, sku: &str, name: &str) -> Product {
    Product {
        id: format!("P{i:03}"),
        sku: sku.to_string(),
        name: name.to_string(),
        quantity: 10,
        category: "Hardware".to_string(),
        min_quantity: 2,
        description: String::new(),
        price: 4.25,
    }
}

/// Ten products; "abc" matches the third by name and the eighth by SKU.
fn inventory() -> Inventory {
    let products = (0..10)
        .map(|i| match i {
            2 => product(i, "CB-2", "Cable ABC"),
            7 => product(i, "abc-777", "Clamp"),
            _ => product(i, &format!("HW-{i}"), &format!("Widget {i}")),
        })
        .collect();
    Inventory::in_memory(products)
}

fn show_products(data: &Inventory) -> ShowProductsView {
    let settings = DisplaySettings::default();
    let ctx = ViewContext {
        size: Size::new(100, 30),
        settings: &settings,
        data,
    };
    ShowProductsView::new(&ctx, ViewSession::entering(SHOW_PRODUCTS))
}

fn press(view: &mut dyn View, data: &mut dyn DataSource, keys: &[Key]) -> Vec<Transition> {
    keys.iter().map(|key| view.handle_input(*key, data)).collect()
}

#[test]
fn table_end_and_home_scroll_the_window() {
    // Height 8 leaves 5 visible rows under the border and header
    let mut table = Table::new(vec![Column::left("Name", 12)], 30, 8);
    table.set_rows((0..10).map(|i| Row::new(vec![format!("row {i}")], i)).collect());
    assert_eq!(table.visible_rows(), 5);

    assert!(table.handle_key(Key::End));
    assert_eq!((table.selected(), table.scroll_top()), (Some(9), 5));
    assert_eq!(table.selected_tag(), Some(&9));

    assert!(table.handle_key(Key::Home));
    assert_eq!((table.selected(), table.scroll_top()), (Some(0), 0));
}

#[test]
fn numeric_edit_commits_typed_digits() {
    let mut field = NumericField::integer("Quantity", 20);
    assert_eq!(field.value(), 0.0);

    let mut editor = ModalEditor::open(InputKind::Integer, &field.edit_text(), field.edit_area());
    assert_eq!(editor.handle_key(Key::Char('1')), None);
    assert_eq!(editor.handle_key(Key::Char('x')), None);
    assert_eq!(editor.handle_key(Key::Char('2')), None);
    let outcome = editor.handle_key(Key::Enter);
    assert!(matches!(outcome, Some(EditOutcome::Confirmed(_))));

    field.commit(outcome.as_ref().map_or("", EditOutcome::value));
    assert_eq!(field.value(), 12.0);
    assert_eq!(field.as_u32(), 12);
}

#[test]
fn choosing_the_current_entry_returns_to_content() {
    let mut data = inventory();
    let mut view = show_products(&data);
    press(&mut view, &mut data, &[Key::Escape]);
    assert_eq!(view.session().group, FocusGroup::Navigation);

    let transitions = press(&mut view, &mut data, &[Key::Enter]);
    assert!(matches!(transitions[0], Transition::Stay));
    assert_eq!(view.session().group, FocusGroup::Content);
    assert_eq!(view.session().nav_index, SHOW_PRODUCTS);

    // A different entry builds a new view
    let transitions = press(&mut view, &mut data, &[Key::Escape, Key::Down, Key::Enter]);
    match &transitions[2] {
        Transition::Replace(next) => {
            assert_eq!(next.index(), UPDATE_PRODUCT);
            assert_eq!(next.session().group, FocusGroup::Content);
        }
        other => panic!("expected a new view, got {other:?}"),
    }
}

#[test]
fn typing_a_query_filters_and_resets_the_table() {
    let mut data = inventory();
    let mut view = show_products(&data);

    // Move the selection first so the reset is visible
    press(&mut view, &mut data, &[Key::Tab, Key::End]);
    assert_eq!(view.picker().table().selected(), Some(9));

    press(&mut view, &mut data, &[Key::Up]);
    // Up from row 8 just moves the selection
    assert_eq!(view.shell().content_focus(), Some(TABLE));
    press(&mut view, &mut data, &[Key::Home, Key::Up]);
    assert_eq!(view.shell().content_focus(), Some(0));

    press(&mut view, &mut data, &[Key::Char('a'), Key::Char('b'), Key::Char('c')]);
    let table = view.picker().table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.selected(), Some(0));
    assert_eq!(table.scroll_top(), 0);
    let names: Vec<&str> = table.rows().iter().map(|r| r.tag.name.as_str()).collect();
    assert_eq!(names, ["Cable ABC", "Clamp"]);
}

#[test]
fn stock_adjustment_persists_through_the_data_source() {
    let mut data = inventory();
    let mut view = show_products(&data);
    press(&mut view, &mut data, &[Key::Tab, Key::Down, Key::Plus, Key::Plus, Key::Minus]);
    assert_eq!(data.get("P001").map(|p| p.quantity), Some(11));
    assert_eq!(view.shell().status(), Some("Widget 1: 11 in stock"));
}
