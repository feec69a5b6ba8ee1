use nav_tree::GroupRecord;
use navs::{NavGroupQuery, NavQuery, NavRecord, Sort, SortField, SortOrder};
use pretty_assertions::assert_eq;

fn navs() -> Vec<NavRecord> {
    vec![
        NavRecord::new("halo", "Halo", "https://halo.run")
            .with_group("tools")
            .with_priority(2)
            .with_creation_timestamp("2024-01-01T00:00:00Z"),
        NavRecord::new("rust", "The Rust Book", "https://doc.rust-lang.org/book")
            .with_group("docs")
            .with_description("Learn RUST the official way")
            .with_priority(1)
            .with_creation_timestamp("2024-02-01T00:00:00Z"),
        NavRecord::new("crates", "crates.io", "https://crates.io")
            .with_group("tools")
            .with_creation_timestamp("2024-03-01T00:00:00Z"),
        NavRecord::new("blog", "My blog", "https://example.com/rustacean")
            .with_priority(1)
            .with_creation_timestamp("2024-04-01T00:00:00Z"),
    ]
}

fn names(navs: &[NavRecord]) -> Vec<&str> {
    navs.iter().map(|nav| nav.name()).collect()
}

#[test]
fn test_default_listing_is_newest_first() {
    let page = NavQuery::new().list(&navs(), 1, 0);

    assert_eq!(names(&page.items), vec!["blog", "crates", "rust", "halo"]);
    assert_eq!(page.total, 4);
}

#[test]
fn test_keyword_matches_name_description_and_url() {
    let page = NavQuery::new().keyword("  RuSt ").list(&navs(), 1, 0);

    // "rust" appears in the url of the book and the blog, and in the
    // description of the book
    assert_eq!(names(&page.items), vec!["blog", "rust"]);

    let page = NavQuery::new().keyword("official").list(&navs(), 1, 0);
    assert_eq!(names(&page.items), vec!["rust"]);

    let page = NavQuery::new().keyword("   ").list(&navs(), 1, 0);
    assert_eq!(page.total, 4);
}

#[test]
fn test_group_filter() {
    let page = NavQuery::new().group_name("tools").list(&navs(), 1, 0);
    assert_eq!(names(&page.items), vec!["crates", "halo"]);

    let page = NavQuery::new().group_name("").list(&navs(), 1, 0);
    assert_eq!(page.total, 4);
}

#[test]
fn test_sort_by_priority() {
    let sort = Sort::parse(["priority,asc"]).unwrap();
    let page = NavQuery::new().sort(sort).list(&navs(), 1, 0);

    // crates has no priority and sorts first; ties fall back to newest first
    assert_eq!(names(&page.items), vec!["crates", "blog", "rust", "halo"]);

    let sort = Sort::by(SortOrder::desc(SortField::Priority));
    let page = NavQuery::new().sort(sort).list(&navs(), 1, 0);
    assert_eq!(names(&page.items), vec!["halo", "blog", "rust", "crates"]);
}

#[test]
fn test_sort_orders_apply_in_request_order() {
    let sort = Sort::by(SortOrder::asc(SortField::Priority))
        .and(SortOrder::asc(SortField::CreationTimestamp));
    let page = NavQuery::new().sort(sort).list(&navs(), 1, 0);
    assert_eq!(names(&page.items), vec!["crates", "rust", "blog", "halo"]);
}

#[test]
fn test_paging() {
    let query = NavQuery::new();

    let first = query.list(&navs(), 1, 3);
    assert_eq!(names(&first.items), vec!["blog", "crates", "rust"]);
    assert_eq!(first.total_pages, 2);
    assert!(first.first && first.has_next);

    let second = query.list(&navs(), 2, 3);
    assert_eq!(names(&second.items), vec!["halo"]);
    assert!(second.last && second.has_previous);
}

#[test]
fn test_group_query() {
    let groups = vec![
        GroupRecord::new("tools", "Developer Tools").with_creation_timestamp("2024-01-01T00:00:00Z"),
        GroupRecord::new("docs", "Documentation").with_creation_timestamp("2024-02-01T00:00:00Z"),
        GroupRecord::new("fun", "Fun stuff").with_creation_timestamp("2024-03-01T00:00:00Z"),
    ];

    let page = NavGroupQuery::new().keyword("DOC").list(&groups, 1, 0);
    let found: Vec<_> = page.items.iter().map(|g| g.name()).collect();
    assert_eq!(found, vec!["docs"]);

    let page = NavGroupQuery::new().list(&groups, 1, 2);
    let found: Vec<_> = page.items.iter().map(|g| g.name()).collect();
    assert_eq!(found, vec!["fun", "docs"]);
    assert!(page.has_next);
}

#[test]
fn test_page_serializes_camel_case() {
    let page = NavQuery::new().list(&navs(), 1, 2);
    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["totalPages"], 2);
    assert_eq!(value["hasNext"], true);
    assert_eq!(value["hasPrevious"], false);
    assert_eq!(value["items"][0]["metadata"]["name"], "blog");
}
