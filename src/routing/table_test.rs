use super::*;

fn table() -> RouteTable {
    RouteTable::library().unwrap()
}

// =============================================================
// NavigationRequest
// =============================================================

#[test]
fn request_strips_query_fragment_and_trailing_slash() {
    assert_eq!(NavigationRequest::new("/books/?page=2#top").path(), "/books");
    assert_eq!(NavigationRequest::new("/members#list").path(), "/members");
}

#[test]
fn request_defaults_to_root() {
    assert_eq!(NavigationRequest::new("").path(), "/");
    assert_eq!(NavigationRequest::new("/").path(), "/");
    assert_eq!(NavigationRequest::new("//").path(), "/");
    assert_eq!(NavigationRequest::new("?next=/books").path(), "/");
}

#[test]
fn request_prefixes_relative_path() {
    assert_eq!(NavigationRequest::new("scanner").path(), "/scanner");
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn library_table_preserves_every_path() {
    let paths: Vec<_> = table().routes().iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/books",
            "/members",
            "/transactions",
            "/issue-return",
            "/scanner",
            "/analytics",
            "/activity-logs",
            "/settings",
        ]
    );
    assert_eq!(table().login_path(), "/login");
}

#[test]
fn only_settings_is_restricted_and_only_to_admin() {
    for route in table().routes() {
        match route.access {
            Access::Unrestricted => assert_ne!(route.screen, Screen::Settings),
            Access::Restricted(roles) => {
                assert_eq!(route.path, "/settings");
                assert_eq!(roles, &[Role::Admin]);
            }
        }
    }
}

#[test]
fn resolve_login_path() {
    assert_eq!(table().resolve(&NavigationRequest::new("/login")), RouteMatch::Login);
    assert_eq!(table().resolve(&NavigationRequest::new("/LOGIN/")), RouteMatch::Login);
}

#[test]
fn resolve_guarded_paths_exactly() {
    let table = table();
    match table.resolve(&NavigationRequest::new("/issue-return")) {
        RouteMatch::Guarded(route) => assert_eq!(route.screen, Screen::IssueReturn),
        other => panic!("unexpected match: {other:?}"),
    }
    match table.resolve(&NavigationRequest::new("/")) {
        RouteMatch::Guarded(route) => assert_eq!(route.screen, Screen::Dashboard),
        other => panic!("unexpected match: {other:?}"),
    }
}

#[test]
fn resolve_is_case_insensitive() {
    match table().resolve(&NavigationRequest::new("/Books")) {
        RouteMatch::Guarded(route) => assert_eq!(route.screen, Screen::Books),
        other => panic!("unexpected match: {other:?}"),
    }
}

#[test]
fn resolve_unknown_and_nested_paths_fall_through() {
    let table = table();
    assert_eq!(table.resolve(&NavigationRequest::new("/unknown-path")), RouteMatch::NotFound);
    assert_eq!(table.resolve(&NavigationRequest::new("/books/42")), RouteMatch::NotFound);
    assert_eq!(table.resolve(&NavigationRequest::new("/login/extra")), RouteMatch::NotFound);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_rejects_relative_pattern() {
    let err = RouteTable::new(LOGIN_PATH, vec![RouteDefinition::open("books", Screen::Books)]).unwrap_err();
    assert_eq!(err, RouteTableError::NotAbsolute("books"));
}

#[test]
fn new_rejects_duplicate_pattern_ignoring_case() {
    let err = RouteTable::new(
        LOGIN_PATH,
        vec![
            RouteDefinition::open("/", Screen::Dashboard),
            RouteDefinition::open("/books", Screen::Books),
            RouteDefinition::open("/BOOKS", Screen::Members),
        ],
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::Duplicate("/BOOKS"));
}

#[test]
fn new_rejects_guarded_login() {
    let err = RouteTable::new(
        LOGIN_PATH,
        vec![RouteDefinition::open("/", Screen::Dashboard), RouteDefinition::open("/login", Screen::Books)],
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::ShadowsLogin("/login"));
}

#[test]
fn new_requires_root_entry() {
    let err = RouteTable::new(LOGIN_PATH, vec![RouteDefinition::open("/books", Screen::Books)]).unwrap_err();
    assert_eq!(err, RouteTableError::MissingRoot);
    assert_eq!(err.to_string(), "route table has no entry for the root path");
}

// =============================================================
// Access
// =============================================================

#[test]
fn access_permits_by_membership() {
    let admin_only = Access::Restricted(&[Role::Admin]);
    assert!(admin_only.permits(Some(Role::Admin)));
    assert!(!admin_only.permits(Some(Role::Member)));
    assert!(!admin_only.permits(None));
    assert!(Access::Unrestricted.permits(None));
}

#[test]
fn access_never_permits_unknown_role() {
    let odd = Access::Restricted(&[Role::Unknown]);
    assert!(!odd.permits(Some(Role::Unknown)));
}

#[test]
fn access_generalises_to_several_roles() {
    let staff = Access::Restricted(&[Role::Admin, Role::Librarian]);
    assert!(staff.permits([Role::Member, Role::Librarian]));
    assert!(!staff.permits([Role::Member]));
}
