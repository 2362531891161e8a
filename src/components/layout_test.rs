use super::*;
use crate::net::types::{Role, User};
use crate::routing::table::{RouteDefinition, Screen};

fn signed_in(role: Option<Role>) -> AuthState {
    AuthState::signed_in(User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None, role })
}

fn paths(auth: &AuthState) -> Vec<&'static str> {
    let table = RouteTable::library().unwrap();
    visible_routes(&table, auth).into_iter().map(|r| r.path).collect()
}

#[test]
fn member_sidebar_omits_settings() {
    let member = paths(&signed_in(Some(Role::Member)));
    assert_eq!(member.len(), 8);
    assert!(!member.contains(&"/settings"));
}

#[test]
fn admin_sidebar_lists_every_route() {
    let admin = paths(&signed_in(Some(Role::Admin)));
    assert_eq!(admin.len(), 9);
    assert_eq!(admin.last(), Some(&"/settings"));
}

#[test]
fn roleless_user_sees_open_routes_only() {
    assert!(!paths(&signed_in(None)).contains(&"/settings"));
}

fn owned_title(route: RouteDefinition) -> impl Fn() -> &'static str + Send + 'static {
    move || route.screen.title()
}

#[test]
fn visible_routes_outlive_the_table() {
    let auth = signed_in(Some(Role::Librarian));
    let routes = {
        let table = RouteTable::library().unwrap();
        visible_routes(&table, &auth)
    };
    let titles: Vec<_> = routes.into_iter().map(owned_title).collect();
    assert_eq!(titles.len(), 8);
    assert_eq!(titles[0](), Screen::Dashboard.title());
}
