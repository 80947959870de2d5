use joist::prelude::*;

// ============================================================================
// Window Arithmetic
// ============================================================================

#[test]
fn test_empty_collection_still_has_one_page() {
    let view = paginate(0, 10, 1);

    assert_eq!(view.total_pages, 1, "page count never drops to zero");
    assert!(view.is_empty());
    assert_eq!(view.range(), 0..0);
}

#[test]
fn test_total_pages_rounds_up() {
    assert_eq!(paginate(25, 10, 1).total_pages, 3);
    assert_eq!(paginate(30, 10, 1).total_pages, 3);
    assert_eq!(paginate(31, 10, 1).total_pages, 4);
    assert_eq!(paginate(1, 10, 1).total_pages, 1);
}

#[test]
fn test_pages_partition_the_collection() {
    let total = 25;
    let mut covered = Vec::new();
    for page in 1..=3 {
        let view = paginate(total, 10, page);
        covered.extend(view.range());
    }

    assert_eq!(covered, (0..total).collect::<Vec<_>>(), "no gaps, no overlap");
}

#[test]
fn test_twelve_records_make_two_pages() {
    let first = paginate(12, 10, 1);
    let second = paginate(12, 10, 2);

    assert_eq!(first.total_pages, 2);
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 2, "last page holds the remainder");
    assert_eq!(second.range(), 10..12);
}

#[test]
fn test_zero_page_size_treated_as_one() {
    let view = paginate(3, 0, 2);

    assert_eq!(view.total_pages, 3);
    assert_eq!(view.range(), 1..2);
}

// ============================================================================
// Out-of-range Pages
// ============================================================================

#[test]
fn test_overflow_page_is_flagged_and_empty() {
    let view = paginate(12, 10, 5);

    assert!(view.is_overflow());
    assert!(view.is_empty(), "range never reaches past the records");
    assert_eq!(view.clamped(), 2, "nearest valid page");
}

#[test]
fn test_page_zero_behaves_like_page_one() {
    let view = paginate(12, 10, 0);

    assert_eq!(view.range(), 0..10);
    assert_eq!(view.clamped(), 1);
    assert!(!view.is_overflow());
}

#[test]
fn test_first_and_last_predicates() {
    assert!(paginate(25, 10, 1).is_first());
    assert!(!paginate(25, 10, 1).is_last());
    assert!(!paginate(25, 10, 2).is_first());
    assert!(!paginate(25, 10, 2).is_last());
    assert!(paginate(25, 10, 3).is_last());
    let single = paginate(5, 10, 1);
    assert!(single.is_first() && single.is_last());
}
