//! Presentation composition.
//!
//! [`DataGrid::render`] turns the current state into a [`Node`] tree. The
//! tree is a pure value; two renders of the same state produce the same
//! tree, and nothing here talks to a display.

use log::warn;

use crate::error::ActionError;
use crate::node::{Align, Border, Justify, Layout, Node, Size};
use crate::style::{Style, Tone};

use super::column::{Alignment, CardFields, Column};
use super::page::PageView;
use super::row::GridRow;
use super::state::{
    DataGrid, DeleteConfirmation, GridInner, page_ids_locked, page_records_locked,
    page_view_locked,
};
use super::view_mode::{CardStyle, ViewMode, resolve_card_style, resolve_mode, visual_grid_columns};

impl<T: GridRow> DataGrid<T> {
    /// Compose the view tree for the current state.
    ///
    /// The only state touched on the way is an out-of-range page, which is
    /// normalized back into bounds before the snapshot is taken.
    pub fn render(&self) -> Node {
        self.normalize_page();
        self.inner
            .read()
            .map(|grid| compose(&grid))
            .unwrap_or_default()
    }

    fn normalize_page(&self) {
        if let Ok(mut grid) = self.inner.write() {
            let total = page_view_locked(&grid).total_pages;
            if grid.current_page > total {
                warn!(
                    "{}: page {} past end, clamping to {total}",
                    self.id(),
                    grid.current_page
                );
                grid.current_page = total;
            } else if grid.current_page == 0 {
                grid.current_page = 1;
            }
        }
    }
}

fn compose<T: GridRow>(grid: &GridInner<T>) -> Node {
    let mut sections = Vec::new();
    if let Some(message) = &grid.source_error {
        sections.push(source_error_band(message));
    }
    if let Some(error) = &grid.last_error {
        sections.push(action_error_band(error));
    }
    if grid.config.selectable && !grid.selection.is_empty() {
        sections.push(bulk_bar(grid));
    }
    sections.push(body(grid));
    let view = page_view_locked(grid);
    if view.total_pages > 1 {
        sections.push(pager(&view));
    }
    let content = Node::column_styled(
        sections,
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    );
    match &grid.confirm {
        Some(confirm) => Node::stack(vec![content, confirm_dialog(confirm)]),
        None => content,
    }
}

fn body<T: GridRow>(grid: &GridInner<T>) -> Node {
    if grid.loading {
        return loading_skeleton(grid.config.page_size);
    }
    if grid.records.is_empty() {
        return empty_state(&grid.config.empty_message);
    }
    match resolve_mode(grid.mode_override, grid.viewport) {
        ViewMode::Table => table_view(grid),
        ViewMode::Cards => match resolve_card_style(grid.viewport) {
            CardStyle::CompactList => compact_list(grid),
            CardStyle::VisualGrid => visual_grid(grid),
        },
    }
}

// ----- Status sections -----

fn loading_skeleton(rows: usize) -> Node {
    let placeholder = Style::new().dim();
    let rows = (0..rows.max(1))
        .map(|_| Node::text_styled("░░░░░░░░░░░░░░░░", placeholder))
        .collect();
    Node::column_styled(
        rows,
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    )
}

fn empty_state(message: &str) -> Node {
    Node::column_styled(
        vec![Node::text_styled(message, Style::new().dim())],
        Style::new(),
        Layout {
            padding: 2,
            justify: Justify::Center,
            align: Align::Center,
            ..Layout::default()
        },
    )
}

fn source_error_band(message: &str) -> Node {
    Node::row_styled(
        vec![Node::text_styled(
            message,
            Style::new().tone(Tone::Danger).bold(),
        )],
        Style::new().tone(Tone::Danger),
        Layout {
            padding: 1,
            border: Border::Single,
            ..Layout::default()
        },
    )
}

fn action_error_band(error: &ActionError) -> Node {
    Node::row_styled(
        vec![
            Node::text_styled(error.to_string(), Style::new().tone(Tone::Danger)),
            Node::button("Dismiss", "dismiss-error"),
        ],
        Style::new().tone(Tone::Danger),
        Layout {
            padding: 1,
            gap: 2,
            justify: Justify::SpaceBetween,
            border: Border::Single,
            ..Layout::default()
        },
    )
}

// ----- Bulk action bar -----

fn bulk_bar<T: GridRow>(grid: &GridInner<T>) -> Node {
    let count = grid.selection.len();
    let mut items = vec![Node::text_styled(
        format!("{count} selected"),
        Style::new().bold(),
    )];
    let all_ids: Vec<String> = grid.records.iter().map(|r| r.identity()).collect();
    if !grid.selection.is_all_selected(&all_ids) {
        items.push(Node::button("Select all", "select-all"));
    }
    items.push(Node::button("Clear", "clear-selection"));
    for (index, action) in grid.config.bulk_actions.iter().enumerate() {
        items.push(Node::button_styled(
            action.label.as_str(),
            format!("bulk:{index}"),
            Style::new().tone(action.tone),
        ));
    }
    if grid.config.on_delete.is_some() {
        items.push(Node::button_styled(
            "Delete",
            "delete-selected",
            Style::new().tone(Tone::Danger),
        ));
    }
    Node::row_styled(
        items,
        Style::new(),
        Layout {
            gap: 2,
            padding: 1,
            border: Border::Single,
            ..Layout::default()
        },
    )
}

// ----- Table view -----

fn table_view<T: GridRow>(grid: &GridInner<T>) -> Node {
    let records = page_records_locked(grid);
    let mut rows = vec![header_row(grid)];
    for (index, record) in records.iter().enumerate() {
        rows.push(table_row(grid, record, index));
    }
    Node::column_styled(
        rows,
        Style::new(),
        Layout {
            border: Border::Single,
            ..Layout::default()
        },
    )
}

fn header_row<T: GridRow>(grid: &GridInner<T>) -> Node {
    let mut cells = Vec::new();
    if grid.config.selectable {
        let ids = page_ids_locked(grid);
        let all = grid.selection.is_all_selected(&ids);
        let any = grid.selection.is_any_selected(&ids);
        cells.push(Node::checkbox(all, any && !all, "select-page"));
    }
    if grid.config.reorderable {
        // gutter above the drag handles
        cells.push(Node::text(" "));
    }
    for column in &grid.config.columns {
        cells.push(header_cell(grid, column));
    }
    Node::row_styled(
        cells,
        Style::new().bold(),
        Layout {
            gap: 2,
            ..Layout::default()
        },
    )
}

fn header_cell<T: GridRow>(grid: &GridInner<T>, column: &Column<T>) -> Node {
    if !column.sortable {
        return Node::text_styled(column.label.as_str(), Style::new().bold());
    }
    let label = match grid.sort.direction_of(&column.key) {
        Some(direction) => format!("{} {}", column.label, direction.arrow()),
        None => column.label.clone(),
    };
    Node::button_styled(label, format!("sort:{}", column.key), Style::new().bold())
}

fn table_row<T: GridRow>(grid: &GridInner<T>, record: &T, index: usize) -> Node {
    let id = record.identity();
    let selected = grid.selection.contains(&id);
    let style = if selected {
        Style::new().tone(Tone::Primary)
    } else {
        Style::new()
    };
    let mut cells = Vec::new();
    if grid.config.selectable {
        cells.push(Node::checkbox(selected, false, format!("select:{id}")));
    }
    if grid.config.reorderable {
        cells.push(Node::button("≡", format!("drag:{index}")));
    }
    for column in &grid.config.columns {
        cells.push(cell(column, record));
    }
    let row = Node::row_styled(
        cells,
        style,
        Layout {
            gap: 2,
            ..Layout::default()
        },
    );
    Node::clickable(format!("row:{id}"), row)
}

fn cell<T>(column: &Column<T>, record: &T) -> Node {
    let content = match column.render.as_ref() {
        Some(render) => render(record),
        None => Node::text(column.value_of(record).display()),
    };
    match column.align {
        Alignment::Left => content,
        Alignment::Center => aligned(content, Justify::Center),
        Alignment::Right => aligned(content, Justify::End),
    }
}

fn aligned(content: Node, justify: Justify) -> Node {
    Node::row_styled(
        vec![content],
        Style::new(),
        Layout {
            justify,
            width: Size::Flex(1),
            ..Layout::default()
        },
    )
}

// ----- Card views -----

fn compact_list<T: GridRow>(grid: &GridInner<T>) -> Node {
    let fields = grid.config.card_keys.resolve(&grid.config.columns);
    let records = page_records_locked(grid);
    let cards = records
        .iter()
        .map(|record| compact_card(grid, &fields, record))
        .collect();
    Node::column_styled(
        cards,
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    )
}

fn compact_card<T: GridRow>(grid: &GridInner<T>, fields: &CardFields<'_, T>, record: &T) -> Node {
    let id = record.identity();
    let selected = grid.selection.contains(&id);
    let mut items = Vec::new();
    if grid.config.selectable {
        items.push(Node::checkbox(selected, false, format!("select:{id}")));
    }
    if let Some(avatar) = fields.avatar {
        let value = avatar.value_of(record);
        if !value.is_null() {
            items.push(Node::image(value.display(), record.display_name()));
        }
    }
    let title = fields
        .title
        .map(|c| title_text(c, record))
        .unwrap_or_else(|| record.display_name());
    let mut text_block = vec![Node::text_styled(title, Style::new().bold())];
    if let Some(subtitle) = fields.subtitle {
        let value = subtitle.value_of(record);
        if !value.is_null() {
            text_block.push(Node::text_styled(value.display(), Style::new().dim()));
        }
    }
    items.push(Node::column_styled(
        text_block,
        Style::new(),
        Layout {
            width: Size::Flex(1),
            ..Layout::default()
        },
    ));
    if let Some(status) = fields.status {
        let value = status.value_of(record);
        if !value.is_null() {
            items.push(Node::badge(value.display(), Tone::Neutral));
        }
    }
    if grid.config.on_toggle_favorite.is_some() {
        let starred = grid
            .config
            .is_favorite
            .as_ref()
            .map(|f| f(record))
            .unwrap_or(false);
        let star = if starred { "★" } else { "☆" };
        items.push(Node::button(star, format!("favorite:{id}")));
    }
    let style = if selected {
        Style::new().tone(Tone::Primary)
    } else {
        Style::new()
    };
    let card = Node::row_styled(
        items,
        style,
        Layout {
            gap: 1,
            padding: 1,
            border: Border::Rounded,
            ..Layout::default()
        },
    );
    Node::clickable(format!("row:{id}"), card)
}

fn visual_grid<T: GridRow>(grid: &GridInner<T>) -> Node {
    let fields = grid.config.card_keys.resolve(&grid.config.columns);
    let records = page_records_locked(grid);
    let columns = visual_grid_columns(grid.viewport.width);
    let rows = records
        .chunks(columns)
        .map(|chunk| {
            let cards = chunk
                .iter()
                .map(|record| visual_card(grid, &fields, record))
                .collect();
            Node::row_styled(
                cards,
                Style::new(),
                Layout {
                    gap: 2,
                    ..Layout::default()
                },
            )
        })
        .collect();
    Node::column_styled(
        rows,
        Style::new(),
        Layout {
            gap: 2,
            ..Layout::default()
        },
    )
}

fn visual_card<T: GridRow>(grid: &GridInner<T>, fields: &CardFields<'_, T>, record: &T) -> Node {
    let id = record.identity();
    let selected = grid.selection.contains(&id);
    let mut items = Vec::new();
    if let Some(image) = fields.image {
        let value = image.value_of(record);
        if !value.is_null() {
            items.push(Node::image(value.display(), record.display_name()));
        }
    }
    let title = fields
        .title
        .map(|c| title_text(c, record))
        .unwrap_or_else(|| record.display_name());
    let mut heading = vec![Node::text_styled(title, Style::new().bold())];
    if grid.config.selectable {
        heading.insert(0, Node::checkbox(selected, false, format!("select:{id}")));
    }
    items.push(Node::row_styled(
        heading,
        Style::new(),
        Layout {
            gap: 1,
            justify: Justify::SpaceBetween,
            ..Layout::default()
        },
    ));
    if let Some(subtitle) = fields.subtitle {
        let value = subtitle.value_of(record);
        if !value.is_null() {
            items.push(Node::text_styled(value.display(), Style::new().dim()));
        }
    }
    if let Some(status) = fields.status {
        let value = status.value_of(record);
        if !value.is_null() {
            items.push(Node::badge(value.display(), Tone::Neutral));
        }
    }
    let style = if selected {
        Style::new().tone(Tone::Primary)
    } else {
        Style::new()
    };
    let card = Node::column_styled(
        items,
        style,
        Layout {
            gap: 1,
            padding: 1,
            border: Border::Rounded,
            width: Size::Flex(1),
            ..Layout::default()
        },
    );
    Node::clickable(format!("row:{id}"), card)
}

fn title_text<T: GridRow>(column: &Column<T>, record: &T) -> String {
    let value = column.value_of(record);
    if value.is_null() {
        record.display_name()
    } else {
        value.display()
    }
}

// ----- Pager and dialogs -----

fn pager(view: &PageView) -> Node {
    let mut items = Vec::new();
    if !view.is_first() {
        items.push(Node::button("‹ Prev", "page-prev"));
    }
    items.push(Node::text(format!(
        "Page {} of {}",
        view.clamped(),
        view.total_pages
    )));
    if !view.is_last() {
        items.push(Node::button("Next ›", "page-next"));
    }
    Node::row_styled(
        items,
        Style::new(),
        Layout {
            gap: 2,
            justify: Justify::Center,
            ..Layout::default()
        },
    )
}

fn confirm_dialog(confirm: &DeleteConfirmation) -> Node {
    let plural = if confirm.total == 1 { "" } else { "s" };
    let mut lines = vec![Node::text_styled(
        format!("Delete {} record{plural}?", confirm.total),
        Style::new().bold(),
    )];
    for name in &confirm.names {
        lines.push(Node::text(name.as_str()));
    }
    if confirm.overflow > 0 {
        lines.push(Node::text_styled(
            format!("and {} more", confirm.overflow),
            Style::new().dim(),
        ));
    }
    lines.push(Node::row_styled(
        vec![
            Node::button("Cancel", "cancel-delete"),
            Node::button_styled("Delete", "confirm-delete", Style::new().tone(Tone::Danger)),
        ],
        Style::new(),
        Layout {
            gap: 2,
            justify: Justify::End,
            ..Layout::default()
        },
    ));
    Node::column_styled(
        lines,
        Style::new(),
        Layout {
            padding: 2,
            gap: 1,
            border: Border::Rounded,
            ..Layout::default()
        },
    )
}
