use joist::grid::visual_grid_columns;
use joist::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    id: String,
    name: String,
    role: String,
}

impl GridRow for Person {
    fn identity(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            id: "p1".into(),
            name: "Ada".into(),
            role: "Engineer".into(),
        },
        Person {
            id: "p2".into(),
            name: "Grace".into(),
            role: "Admiral".into(),
        },
    ]
}

fn columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name").accessor(|p: &Person| CellValue::text(p.name.as_str())),
        Column::new("role", "Role").accessor(|p: &Person| CellValue::text(p.role.as_str())),
    ]
}

fn bold_texts(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Text { content, style } if style.bold => out.push(content.clone()),
        Node::Column { children, .. } | Node::Row { children, .. } | Node::Stack { children, .. } => {
            for child in children {
                bold_texts(child, out);
            }
        }
        Node::Clickable { child, .. } => bold_texts(child, out),
        _ => {}
    }
}

// ============================================================================
// Mode Resolution
// ============================================================================

#[test]
fn test_explicit_mode_wins() {
    let narrow = ViewportSize::new(400, 800);
    let wide = ViewportSize::new(1600, 900);

    assert_eq!(resolve_mode(Some(ViewMode::Table), narrow), ViewMode::Table);
    assert_eq!(resolve_mode(Some(ViewMode::Cards), wide), ViewMode::Cards);
}

#[test]
fn test_viewport_decides_without_override() {
    assert_eq!(resolve_mode(None, ViewportSize::new(767, 800)), ViewMode::Cards);
    assert_eq!(
        resolve_mode(None, ViewportSize::new(NARROW_BREAKPOINT, 800)),
        ViewMode::Table,
        "the breakpoint itself is wide"
    );
    assert_eq!(resolve_mode(None, ViewportSize::new(1600, 900)), ViewMode::Table);
}

#[test]
fn test_card_style_follows_viewport() {
    assert_eq!(
        resolve_card_style(ViewportSize::new(500, 800)),
        CardStyle::CompactList
    );
    assert_eq!(
        resolve_card_style(ViewportSize::new(1200, 800)),
        CardStyle::VisualGrid
    );
}

#[test]
fn test_visual_grid_column_counts() {
    assert_eq!(visual_grid_columns(800), 2);
    assert_eq!(visual_grid_columns(1023), 2);
    assert_eq!(visual_grid_columns(1024), 3);
    assert_eq!(visual_grid_columns(1439), 3);
    assert_eq!(visual_grid_columns(1440), 4);
    assert_eq!(visual_grid_columns(1919), 4);
    assert_eq!(visual_grid_columns(1920), 5);
    assert_eq!(visual_grid_columns(2560), 5);
}

// ============================================================================
// Grid Integration
// ============================================================================

#[test]
fn test_default_viewport_is_wide() {
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(people());

    assert_eq!(grid.view_mode(), ViewMode::Table);
}

#[test]
fn test_mode_override_beats_viewport() {
    let grid = DataGrid::new(GridConfig::new(columns()).mode(ViewMode::Table));
    grid.watch_viewport(&StaticViewport::narrow());

    assert_eq!(grid.view_mode(), ViewMode::Table);

    grid.set_mode(None);
    assert_eq!(grid.view_mode(), ViewMode::Cards, "follows the viewport again");
}

#[test]
fn test_card_style_keeps_following_viewport_when_cards_forced() {
    let grid = DataGrid::new(GridConfig::new(columns()).mode(ViewMode::Cards));
    grid.set_records(people());

    grid.set_viewport(ViewportSize::new(1600, 900));
    assert_eq!(grid.view_mode(), ViewMode::Cards);
    assert_eq!(grid.card_style(), CardStyle::VisualGrid);

    grid.set_viewport(ViewportSize::new(500, 800));
    assert_eq!(grid.view_mode(), ViewMode::Cards);
    assert_eq!(grid.card_style(), CardStyle::CompactList);
}

#[test]
fn test_shared_viewport_resize_re_resolves() {
    let viewport = SharedViewport::new(1280, 800);
    let grid = DataGrid::new(GridConfig::new(columns()));
    grid.set_records(people());
    let subscription = grid.watch_viewport(&viewport);

    assert_eq!(grid.view_mode(), ViewMode::Table);

    viewport.set_size(600, 800);
    assert_eq!(grid.viewport(), ViewportSize::new(600, 800));
    assert_eq!(grid.view_mode(), ViewMode::Cards);

    drop(subscription);
}

#[test]
fn test_dropped_subscription_stops_updates() {
    let viewport = SharedViewport::new(1280, 800);
    let grid = DataGrid::new(GridConfig::new(columns()));
    let subscription = grid.watch_viewport(&viewport);
    assert_eq!(viewport.listener_count(), 1);

    drop(subscription);
    assert_eq!(viewport.listener_count(), 0);

    viewport.set_size(600, 800);
    assert_eq!(
        grid.viewport(),
        ViewportSize::new(1280, 800),
        "detached grids keep their last size"
    );
}

// ============================================================================
// Card Field Fallbacks
// ============================================================================

#[test]
fn test_cards_fall_back_to_leading_columns() {
    let grid = DataGrid::new(GridConfig::new(columns()).mode(ViewMode::Cards));
    grid.set_records(people());
    grid.set_viewport(ViewportSize::new(500, 800));

    let tree = grid.render();
    let texts = tree.texts();

    assert!(texts.contains(&"Ada".to_string()), "first column is the title");
    assert!(
        texts.contains(&"Engineer".to_string()),
        "second column is the subtitle"
    );
}

#[test]
fn test_card_keys_map_explicit_columns() {
    let config = GridConfig::new(columns())
        .mode(ViewMode::Cards)
        .card_keys(CardKeys::new().title("role"));
    let grid = DataGrid::new(config);
    grid.set_records(people());
    grid.set_viewport(ViewportSize::new(500, 800));

    let mut titles = Vec::new();
    bold_texts(&grid.render(), &mut titles);

    assert!(
        titles.contains(&"Engineer".to_string()),
        "mapped column renders as the bold title"
    );
    assert!(!titles.contains(&"Ada".to_string()));
}
