//! Cards Example
//!
//! Shows the responsive view switch driven by a shared viewport:
//! - Wide viewports render the table, narrow ones fall back to cards
//! - Card fields come from [`CardKeys`] mappings
//! - Very wide viewports upgrade cards to a visual grid when forced
//! - Favorites sort to the front and toggle from the card star

use std::fs::File;

use joist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone)]
struct Contact {
    id: String,
    name: String,
    team: String,
    avatar: Option<String>,
    starred: bool,
}

impl GridRow for Contact {
    fn identity(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

fn contacts() -> Vec<Contact> {
    let names = ["Ada", "Grace", "Edsger", "Barbara", "Donald", "Radia"];
    let teams = ["Platform", "Design", "Support"];
    names
        .iter()
        .enumerate()
        .map(|(index, name)| Contact {
            id: format!("p{index}"),
            name: (*name).to_string(),
            team: teams[index % teams.len()].to_string(),
            avatar: (index % 2 == 0).then(|| format!("avatars/{name}.png")),
            starred: index == 3,
        })
        .collect()
}

fn columns() -> Vec<Column<Contact>> {
    vec![
        Column::new("name", "Name").sortable(|c: &Contact| CellValue::text(c.name.as_str())),
        Column::new("team", "Team").accessor(|c: &Contact| CellValue::text(c.team.as_str())),
        Column::new("avatar", "Avatar")
            .accessor(|c: &Contact| CellValue::opt(c.avatar.clone(), CellValue::text)),
    ]
}

fn dump(node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Empty => println!("{pad}(empty)"),
        Node::Text { content, .. } => println!("{pad}text {content:?}"),
        Node::Column { children, .. } => {
            println!("{pad}column");
            for child in children {
                dump(child, depth + 1);
            }
        }
        Node::Row { children, .. } => {
            println!("{pad}row");
            for child in children {
                dump(child, depth + 1);
            }
        }
        Node::Stack { children, .. } => {
            println!("{pad}stack");
            for child in children {
                dump(child, depth + 1);
            }
        }
        Node::Button { label, action, .. } => println!("{pad}button {label:?} -> {action}"),
        Node::Checkbox { action, .. } => println!("{pad}checkbox -> {action}"),
        Node::Badge { label, .. } => println!("{pad}badge {label:?}"),
        Node::Image { source, .. } => println!("{pad}image {source}"),
        Node::Clickable { child, action } => {
            println!("{pad}clickable -> {action}");
            dump(child, depth + 1);
        }
    }
}

fn show(title: &str, grid: &DataGrid<Contact>) {
    println!("\n== {title} ==");
    dump(&grid.render(), 0);
}

#[tokio::main]
async fn main() {
    if let Ok(log_file) = File::create("cards.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config = GridConfig::new(columns())
        .favorites_first(|c: &Contact| c.starred)
        .card_keys(
            CardKeys::new()
                .title("name")
                .subtitle("team")
                .avatar("avatar"),
        )
        .on_toggle_favorite(|c: &Contact| println!(">> toggle star on {}", c.name));

    let grid = DataGrid::new(config);
    let viewport = SharedViewport::new(1280, 800);
    let subscription = grid.watch_viewport(&viewport);

    grid.set_records(contacts());
    show("wide viewport, table mode", &grid);

    viewport.set_size(600, 800);
    show("narrow viewport, compact cards", &grid);

    grid.set_mode(Some(ViewMode::Cards));
    viewport.set_size(1920, 1080);
    show("forced cards on a wide screen, visual grid", &grid);

    grid.handle_action("favorite:p0");
    show("favorite toggle relayed to the host", &grid);

    drop(subscription);
    viewport.set_size(500, 700);
    show("subscription dropped, viewport updates ignored", &grid);
}
