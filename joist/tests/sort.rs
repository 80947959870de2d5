use joist::prelude::*;

#[derive(Debug, Clone)]
struct Client {
    id: String,
    name: String,
    revenue: Option<f64>,
    joined: Option<i64>,
    favorite: bool,
}

impl GridRow for Client {
    fn identity(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

fn client(id: &str, name: &str, revenue: Option<f64>, joined: Option<i64>) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        revenue,
        joined,
        favorite: false,
    }
}

fn columns() -> Vec<Column<Client>> {
    vec![
        Column::new("name", "Name").sortable(|c: &Client| CellValue::text(c.name.as_str())),
        Column::new("revenue", "Revenue")
            .sortable(|c: &Client| CellValue::opt(c.revenue, CellValue::number)),
        Column::new("joined", "Joined")
            .sortable(|c: &Client| CellValue::opt(c.joined, CellValue::timestamp)),
    ]
}

fn roster() -> Vec<Client> {
    vec![
        client("c1", "Mori", Some(1200.0), Some(1_700_000_000_000)),
        client("c2", "Abel", Some(3400.0), Some(1_690_000_000_000)),
        client("c3", "Zhou", None, Some(1_710_000_000_000)),
        client("c4", "abel", Some(90.0), None),
        client("c5", "Quinn", Some(500.0), Some(1_680_000_000_000)),
    ]
}

fn names(records: &[Client]) -> Vec<&str> {
    records.iter().map(|c| c.name.as_str()).collect()
}

fn cycled(key: &str, clicks: usize) -> SortState {
    let mut sort = SortState::new();
    for _ in 0..clicks {
        sort.cycle(key);
    }
    sort
}

// ============================================================================
// Column Sorting
// ============================================================================

#[test]
fn test_sort_by_name_ascending() {
    let mut records = roster();
    resolve_sort(&mut records, &columns(), &cycled("name", 1), false, None);

    assert_eq!(
        names(&records),
        vec!["Abel", "abel", "Mori", "Quinn", "Zhou"],
        "case-insensitive order with case-sensitive tie break"
    );
}

#[test]
fn test_descending_reverses_present_values_only() {
    let mut records = roster();
    resolve_sort(&mut records, &columns(), &cycled("revenue", 2), false, None);

    assert_eq!(
        names(&records),
        vec!["Abel", "Mori", "Quinn", "abel", "Zhou"],
        "highest revenue first, absent revenue still last"
    );
}

#[test]
fn test_nulls_last_in_both_directions() {
    let mut ascending = roster();
    resolve_sort(&mut ascending, &columns(), &cycled("revenue", 1), false, None);
    assert_eq!(ascending.last().unwrap().name, "Zhou", "nulls last ascending");

    let mut descending = roster();
    resolve_sort(
        &mut descending,
        &columns(),
        &cycled("revenue", 2),
        false,
        None,
    );
    assert_eq!(
        descending.last().unwrap().name,
        "Zhou",
        "nulls last descending too"
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut records = vec![
        client("c1", "First", Some(100.0), None),
        client("c2", "Second", Some(100.0), None),
        client("c3", "Third", Some(100.0), None),
    ];
    resolve_sort(&mut records, &columns(), &cycled("revenue", 1), false, None);
    assert_eq!(names(&records), vec!["First", "Second", "Third"]);

    resolve_sort(&mut records, &columns(), &cycled("revenue", 2), false, None);
    assert_eq!(
        names(&records),
        vec!["First", "Second", "Third"],
        "equal keys keep their relative order under either direction"
    );
}

#[test]
fn test_resolving_twice_is_idempotent() {
    let sort = cycled("name", 1);
    let mut once = roster();
    resolve_sort(&mut once, &columns(), &sort, false, None);
    let mut twice = once.clone();
    resolve_sort(&mut twice, &columns(), &sort, false, None);

    assert_eq!(names(&once), names(&twice));
}

#[test]
fn test_unknown_key_leaves_order_untouched() {
    let mut records = roster();
    resolve_sort(&mut records, &columns(), &cycled("bogus", 1), false, None);

    assert_eq!(names(&records), names(&roster()));
}

#[test]
fn test_numeric_sort_is_numeric_not_lexical() {
    let mut records = vec![
        client("c1", "Two", Some(2.0), None),
        client("c2", "Ten", Some(10.0), None),
        client("c3", "One", Some(1.0), None),
    ];
    resolve_sort(&mut records, &columns(), &cycled("revenue", 1), false, None);

    assert_eq!(names(&records), vec!["One", "Two", "Ten"]);
}

#[test]
fn test_timestamp_ascending() {
    let mut records = roster();
    resolve_sort(&mut records, &columns(), &cycled("joined", 1), false, None);

    assert_eq!(
        names(&records),
        vec!["Quinn", "Abel", "Mori", "Zhou", "abel"],
        "oldest first, missing join date last"
    );
}

#[test]
fn test_mixed_value_types_compare_as_text() {
    let columns = vec![Column::new("code", "Code").sortable(|c: &Client| match c.revenue {
        Some(n) => CellValue::number(n),
        None => CellValue::text(c.name.as_str()),
    })];
    let mut records = vec![
        client("c1", "2", Some(2.0), None),
        client("c2", "10", None, None),
    ];
    resolve_sort(&mut records, &columns, &cycled("code", 1), false, None);

    assert_eq!(
        names(&records),
        vec!["10", "2"],
        "text fallback orders \"10\" before \"2\""
    );
}

// ============================================================================
// Favorites Grouping
// ============================================================================

fn starred(mut client: Client) -> Client {
    client.favorite = true;
    client
}

fn is_favorite(c: &Client) -> bool {
    c.favorite
}

#[test]
fn test_favorites_grouped_before_rest() {
    let mut records = vec![
        client("c1", "One", None, None),
        starred(client("c2", "Two", None, None)),
        client("c3", "Three", None, None),
        starred(client("c4", "Four", None, None)),
        client("c5", "Five", None, None),
    ];
    resolve_sort(
        &mut records,
        &columns(),
        &SortState::new(),
        true,
        Some(&is_favorite),
    );

    assert_eq!(
        names(&records),
        vec!["Two", "Four", "One", "Three", "Five"],
        "favorites first, original order kept within each group"
    );
}

#[test]
fn test_column_sort_runs_over_the_whole_sequence() {
    let mut records = vec![
        client("c1", "Aaron", None, None),
        starred(client("c2", "Zelda", None, None)),
        client("c3", "Nadia", None, None),
    ];
    resolve_sort(
        &mut records,
        &columns(),
        &cycled("name", 1),
        true,
        Some(&is_favorite),
    );

    assert_eq!(
        names(&records),
        vec!["Aaron", "Nadia", "Zelda"],
        "distinct keys override the grouping"
    );
}

#[test]
fn test_equal_keys_keep_favorites_ahead() {
    let mut records = vec![
        client("c1", "Same", Some(10.0), None),
        starred(client("c2", "Same", Some(10.0), None)),
        client("c3", "Other", Some(10.0), None),
    ];
    resolve_sort(
        &mut records,
        &columns(),
        &cycled("revenue", 1),
        true,
        Some(&is_favorite),
    );

    let ids: Vec<&str> = records.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["c2", "c1", "c3"],
        "stable sort preserves the favorites-first order on ties"
    );
}

#[test]
fn test_grouping_off_ignores_predicate() {
    let mut records = vec![
        client("c1", "One", None, None),
        starred(client("c2", "Two", None, None)),
    ];
    resolve_sort(&mut records, &columns(), &SortState::new(), false, None);

    assert_eq!(names(&records), vec!["One", "Two"]);
}
