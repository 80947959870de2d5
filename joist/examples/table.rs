//! Table Example
//!
//! Drives a sortable, selectable client table headlessly:
//! - Column sort cycling through ascending / descending / off
//! - Page navigation over a 23-record collection
//! - Multi-selection with the bulk bar and confirmed deletion
//!
//! Every step prints the composed node tree, which is what a renderer
//! would consume.

use std::fs::File;

use joist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone)]
struct Client {
    id: String,
    name: String,
    industry: String,
    revenue: Option<f64>,
}

impl GridRow for Client {
    fn identity(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

fn clients() -> Vec<Client> {
    let industries = ["Logistics", "Retail", "Energy", "Media"];
    (1..=23)
        .map(|n| Client {
            id: format!("c{n}"),
            name: format!("Client {n:02}"),
            industry: industries[n % industries.len()].to_string(),
            revenue: if n % 7 == 0 { None } else { Some(n as f64 * 1250.0) },
        })
        .collect()
}

fn columns() -> Vec<Column<Client>> {
    vec![
        Column::new("name", "Name").sortable(|c: &Client| CellValue::text(c.name.as_str())),
        Column::new("industry", "Industry")
            .accessor(|c: &Client| CellValue::text(c.industry.as_str())),
        Column::new("revenue", "Revenue")
            .align(Alignment::Right)
            .sortable(|c: &Client| CellValue::opt(c.revenue, CellValue::number)),
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
        Node::Checkbox {
            checked,
            indeterminate,
            action,
        } => {
            let mark = if *indeterminate {
                '-'
            } else if *checked {
                'x'
            } else {
                ' '
            };
            println!("{pad}checkbox [{mark}] -> {action}");
        }
        Node::Badge { label, .. } => println!("{pad}badge {label:?}"),
        Node::Image { source, .. } => println!("{pad}image {source}"),
        Node::Clickable { child, action } => {
            println!("{pad}clickable -> {action}");
            dump(child, depth + 1);
        }
    }
}

fn show(title: &str, grid: &DataGrid<Client>) {
    println!("\n== {title} ==");
    dump(&grid.render(), 0);
}

#[tokio::main]
async fn main() {
    // Log to a file so stdout stays free for the tree dumps
    if let Ok(log_file) = File::create("table.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config = GridConfig::new(columns())
        .selectable()
        .on_activate(|client: &Client| println!(">> activated {}", client.name))
        .on_delete(|removed: Vec<Client>| {
            Box::pin(async move {
                println!(">> deleting {} clients", removed.len());
                Ok(())
            })
        })
        .bulk_action(BulkAction::new("Export", |picked: Vec<Client>| {
            Box::pin(async move {
                println!(">> exporting {} clients", picked.len());
                Ok(())
            })
        }));

    let grid = DataGrid::new(config);
    grid.set_records(clients());
    show("initial page", &grid);

    grid.handle_action("sort:revenue");
    grid.handle_action("sort:revenue");
    show("revenue descending", &grid);

    grid.handle_action("page-next");
    show("second page", &grid);

    grid.handle_action("select:c11");
    grid.handle_action("select:c12");
    show("two selected", &grid);

    grid.handle_action("delete-selected");
    show("confirmation open", &grid);

    if let Err(error) = grid.delete_selected().await {
        println!(">> delete failed: {error}");
    }
    show("after delete", &grid);
}
