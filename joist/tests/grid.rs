use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use joist::notify;
use joist::prelude::*;

#[derive(Debug, Clone)]
struct Doc {
    id: String,
    name: String,
    status: String,
}

impl GridRow for Doc {
    fn identity(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

fn docs(count: usize) -> Vec<Doc> {
    (1..=count)
        .map(|n| Doc {
            id: format!("d{n}"),
            name: format!("Doc {n}"),
            status: if n % 2 == 0 { "Draft" } else { "Final" }.to_string(),
        })
        .collect()
}

fn columns() -> Vec<Column<Doc>> {
    vec![
        Column::new("name", "Name").sortable(|d: &Doc| CellValue::text(d.name.as_str())),
        Column::new("status", "Status").accessor(|d: &Doc| CellValue::text(d.status.as_str())),
    ]
}

fn contains_text(tree: &Node, needle: &str) -> bool {
    tree.texts().iter().any(|t| t == needle)
}

// ============================================================================
// Status Presentation
// ============================================================================

#[test]
fn test_loading_renders_a_skeleton() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_loading(true);

    let tree = grid.render();
    let placeholders = tree.count_where(&|n| matches!(n, Node::Text { style, .. } if style.dim));

    assert_eq!(placeholders, DEFAULT_PAGE_SIZE, "one placeholder per page slot");
}

#[test]
fn test_set_records_clears_loading() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_loading(true);
    grid.set_records(docs(3));

    assert!(!grid.loading());
    assert!(contains_text(&grid.render(), "Doc 1"));
}

#[test]
fn test_empty_state_message() {
    let grid = DataGrid::new(GridConfig::new(columns()).empty_message("No documents yet"));
    grid.set_records(Vec::new());

    assert!(contains_text(&grid.render(), "No documents yet"));
}

#[test]
fn test_source_error_band() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_source_error("fetch failed");

    assert!(!grid.loading(), "a source error ends the loading state");
    assert!(contains_text(&grid.render(), "fetch failed"));
}

// ============================================================================
// Bulk Bar
// ============================================================================

#[test]
fn test_bulk_bar_only_with_selection() {
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    grid.set_records(docs(5));

    assert!(!contains_text(&grid.render(), "1 selected"));

    grid.toggle_select("d1");
    let tree = grid.render();
    assert!(contains_text(&tree, "1 selected"));
    assert!(tree.find_action("clear-selection").is_some());
    assert!(
        tree.find_action("delete-selected").is_none(),
        "no delete button without a delete handler"
    );
}

#[test]
fn test_select_all_button_hidden_once_everything_is_selected() {
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    grid.set_records(docs(5));

    grid.toggle_select("d1");
    assert!(grid.render().find_action("select-all").is_some());

    grid.select_all();
    let tree = grid.render();
    assert!(contains_text(&tree, "5 selected"));
    assert!(tree.find_action("select-all").is_none());
}

#[test]
fn test_bulk_bar_lists_custom_actions_and_delete() {
    let action = BulkAction::new("Archive", |_: Vec<Doc>| async { Ok(()) }.boxed())
        .tone(Tone::Warning);
    let grid = DataGrid::new(
        GridConfig::new(columns())
            .selectable()
            .bulk_action(action)
            .on_delete(|_: Vec<Doc>| async { Ok(()) }.boxed()),
    );
    grid.set_records(docs(5));
    grid.toggle_select("d2");

    let tree = grid.render();
    let archive = tree.find_action("bulk:0").expect("custom action button");
    assert!(matches!(
        archive,
        Node::Button { label, style, .. } if label == "Archive" && style.tone == Some(Tone::Warning)
    ));
    assert!(tree.find_action("delete-selected").is_some());
}

// ============================================================================
// Confirmation Dialog
// ============================================================================

#[test]
fn test_confirm_dialog_lists_names_with_overflow() {
    let grid = DataGrid::new(
        GridConfig::new(columns())
            .selectable()
            .on_delete(|_: Vec<Doc>| async { Ok(()) }.boxed()),
    );
    grid.set_records(docs(12));
    grid.select_all();
    grid.request_delete_selected();

    let tree = grid.render();
    assert!(contains_text(&tree, "Delete 12 records?"));
    assert!(contains_text(&tree, "Doc 1"));
    assert!(contains_text(&tree, "Doc 10"));
    assert!(!contains_text(&tree, "Doc 11"), "names truncate at ten");
    assert!(contains_text(&tree, "and 2 more"));
    assert!(tree.find_action("confirm-delete").is_some());
    assert!(tree.find_action("cancel-delete").is_some());
}

// ============================================================================
// Pagination Presentation
// ============================================================================

#[test]
fn test_pager_shown_only_for_multiple_pages() {
    let single = DataGrid::new(GridConfig::new(columns()));
    single.set_records(docs(5));
    assert!(single.render().find_action("page-next").is_none());

    let multi = DataGrid::new(GridConfig::new(columns()));
    multi.set_records(docs(12));
    let tree = multi.render();
    assert!(contains_text(&tree, "Page 1 of 2"));
    assert!(tree.find_action("page-next").is_some());
    assert!(tree.find_action("page-prev").is_none(), "no prev on the first page");

    multi.handle_action("page-next");
    let tree = multi.render();
    assert!(contains_text(&tree, "Page 2 of 2"));
    assert!(tree.find_action("page-next").is_none());
    assert!(tree.find_action("page-prev").is_some());
}

#[test]
fn test_page_clamps_when_the_collection_shrinks() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(docs(25));
    grid.set_page(3);
    assert_eq!(grid.current_page(), 3);

    grid.set_records(docs(5));

    assert_eq!(grid.current_page(), 1);
    assert_eq!(grid.total_pages(), 1);
}

// ============================================================================
// Header Interaction
// ============================================================================

#[test]
fn test_header_click_cycles_three_states() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(docs(5));

    grid.handle_action("sort:name");
    assert_eq!(grid.sort_state().direction_of("name"), Some(Direction::Ascending));
    let header = grid.render().find_action("sort:name").cloned();
    assert!(matches!(
        header,
        Some(Node::Button { label, .. }) if label == "Name ▲"
    ));

    grid.handle_action("sort:name");
    assert_eq!(grid.sort_state().direction_of("name"), Some(Direction::Descending));

    grid.handle_action("sort:name");
    assert!(!grid.sort_state().is_sorted(), "third click clears the sort");
}

#[test]
fn test_unsortable_column_has_no_sort_affordance() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(docs(5));

    grid.toggle_sort("status");
    assert!(!grid.sort_state().is_sorted());
    assert!(grid.render().find_action("sort:status").is_none());
}

#[test]
fn test_header_checkbox_is_tristate() {
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    grid.set_records(docs(5));

    grid.toggle_select("d1");
    let header = grid.render().find_action("select-page").cloned();
    assert!(matches!(
        header,
        Some(Node::Checkbox { checked: false, indeterminate: true, .. })
    ));

    grid.toggle_page_selection();
    let header = grid.render().find_action("select-page").cloned();
    assert!(matches!(
        header,
        Some(Node::Checkbox { checked: true, indeterminate: false, .. })
    ));
}

// ============================================================================
// Row Interaction
// ============================================================================

#[test]
fn test_row_click_toggles_in_selection_mode() {
    let activations = Arc::new(AtomicUsize::new(0));
    let grid = DataGrid::new(GridConfig::new(columns()).selectable().on_activate({
        let activations = Arc::clone(&activations);
        move |_: &Doc| {
            activations.fetch_add(1, Ordering::SeqCst);
        }
    }));
    grid.set_records(docs(5));

    grid.toggle_select("d1");
    assert_eq!(grid.handle_action("row:d2"), EventResult::Consumed);
    assert_eq!(grid.selected_count(), 2, "click toggled instead of activating");
    assert_eq!(activations.load(Ordering::SeqCst), 0);

    grid.clear_selection();
    assert_eq!(grid.handle_action("row:d2"), EventResult::Consumed);
    assert_eq!(activations.load(Ordering::SeqCst), 1, "normal click activates");
    assert_eq!(grid.selected_count(), 0);
}

#[test]
fn test_selected_rows_are_toned() {
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    grid.set_records(docs(3));
    grid.toggle_select("d1");

    let tree = grid.render();
    let row = tree.find_action("row:d1").expect("row click target");
    let toned = matches!(
        row,
        Node::Clickable { child, .. }
            if matches!(child.as_ref(), Node::Row { style, .. } if style.tone == Some(Tone::Primary))
    );
    assert!(toned, "selected row carries the primary tone");
}

#[test]
fn test_interactive_affordances_follow_config() {
    let plain = DataGrid::new(GridConfig::new(columns()));
    plain.set_records(docs(3));
    let tree = plain.render();
    assert!(tree.find_action("select:d1").is_none());
    assert!(tree.find_action("drag:0").is_none());

    let full = DataGrid::new(GridConfig::new(columns()).selectable().reorderable());
    full.set_records(docs(3));
    let tree = full.render();
    assert!(tree.find_action("select:d1").is_some());
    assert!(tree.find_action("drag:0").is_some());
}

// ============================================================================
// Change Tracking
// ============================================================================

#[test]
fn test_dirty_flag_follows_mutations() {
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    assert!(grid.is_dirty(), "fresh grids want a first render");

    grid.clear_dirty();
    assert!(!grid.is_dirty());

    grid.set_records(docs(3));
    assert!(grid.is_dirty());
}

#[test]
fn test_debug_reports_the_grid_shape() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(docs(3));
    grid.clear_dirty();

    let repr = format!("{grid:?}");
    assert!(repr.contains("records: 3"), "{repr}");
    assert!(repr.contains("dirty: false"), "{repr}");
}

#[tokio::test]
async fn test_notifier_pinged_on_mutation() {
    let (tx, mut rx) = notify::channel();
    let grid = DataGrid::new(GridConfig::new(columns()).selectable());
    grid.set_notifier(tx);

    grid.set_records(docs(3));

    assert_eq!(rx.recv().await, Some(()), "mutation signals the host loop");
}
