//! Static route table: path pattern → screen + role restriction.
//!
//! DESIGN
//! ======
//! The table has two levels. The outer level knows only the login path and
//! "everything else"; everything else resolves against the guarded entries,
//! and a path no entry claims falls through to the not-found screen.
//! Matching is exact on the normalised path and ASCII case-insensitive, which
//! is how browser routers treat these paths.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::Role;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

/// Screen capability references, one per routable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,
    Books,
    Members,
    Transactions,
    IssueReturn,
    Scanner,
    Analytics,
    ActivityLogs,
    Settings,
    Login,
    NotFound,
}

impl Screen {
    /// Human title used for navigation labels and the document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Books => "Books",
            Self::Members => "Members",
            Self::Transactions => "Transactions",
            Self::IssueReturn => "Issue / Return",
            Self::Scanner => "Scanner",
            Self::Analytics => "Analytics",
            Self::ActivityLogs => "Activity Logs",
            Self::Settings => "Settings",
            Self::Login => "Sign in",
            Self::NotFound => "Not found",
        }
    }
}

/// Role restriction of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Unrestricted,
    /// Only users holding one of these roles may render the screen.
    Restricted(&'static [Role]),
}

impl Access {
    /// Whether a user holding `roles` satisfies this restriction.
    ///
    /// Users carry one role today, so callers pass `role.into_iter()`.
    /// `Role::Unknown` never satisfies a restriction even if listed.
    pub fn permits<I>(self, roles: I) -> bool
    where
        I: IntoIterator<Item = Role>,
    {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(allowed) => roles
                .into_iter()
                .any(|role| role != Role::Unknown && allowed.contains(&role)),
        }
    }
}

/// One guarded entry of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDefinition {
    pub path: &'static str,
    pub screen: Screen,
    pub access: Access,
}

impl RouteDefinition {
    pub const fn open(path: &'static str, screen: Screen) -> Self {
        Self { path, screen, access: Access::Unrestricted }
    }

    pub const fn restricted(path: &'static str, screen: Screen, roles: &'static [Role]) -> Self {
        Self { path, screen, access: Access::Restricted(roles) }
    }
}

/// Guarded screens of the library console, in navigation order.
pub const LIBRARY_ROUTES: &[RouteDefinition] = &[
    RouteDefinition::open("/", Screen::Dashboard),
    RouteDefinition::open("/books", Screen::Books),
    RouteDefinition::open("/members", Screen::Members),
    RouteDefinition::open("/transactions", Screen::Transactions),
    RouteDefinition::open("/issue-return", Screen::IssueReturn),
    RouteDefinition::open("/scanner", Screen::Scanner),
    RouteDefinition::open("/analytics", Screen::Analytics),
    RouteDefinition::open("/activity-logs", Screen::ActivityLogs),
    RouteDefinition::restricted("/settings", Screen::Settings, &[Role::Admin]),
];

/// A single navigation attempt, normalised for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    path: String,
}

impl NavigationRequest {
    /// Strip query and fragment, collapse a trailing slash, default to `/`.
    pub fn new(raw: &str) -> Self {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let trimmed = raw[..end].trim_end_matches('/');
        let path = if trimmed.is_empty() {
            ROOT_PATH.to_owned()
        } else if trimmed.starts_with('/') {
            trimmed.to_owned()
        } else {
            format!("/{trimmed}")
        };
        Self { path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Result of resolving a request against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Login,
    Guarded(&'a RouteDefinition),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route pattern must start with '/': {0}")]
    NotAbsolute(&'static str),
    #[error("duplicate route pattern: {0}")]
    Duplicate(&'static str),
    #[error("guarded route shadows the login path: {0}")]
    ShadowsLogin(&'static str),
    #[error("route table has no entry for the root path")]
    MissingRoot,
}

/// Validated, immutable route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    login: &'static str,
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Validate and build a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] when a pattern is relative, appears twice
    /// (case-insensitively), collides with the login path, or when no entry
    /// serves the root path.
    pub fn new(login: &'static str, routes: Vec<RouteDefinition>) -> Result<Self, RouteTableError> {
        if !login.starts_with('/') {
            return Err(RouteTableError::NotAbsolute(login));
        }
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::NotAbsolute(route.path));
            }
            if route.path.eq_ignore_ascii_case(login) {
                return Err(RouteTableError::ShadowsLogin(route.path));
            }
            if routes[..i].iter().any(|prev| prev.path.eq_ignore_ascii_case(route.path)) {
                return Err(RouteTableError::Duplicate(route.path));
            }
        }
        if !routes.iter().any(|r| r.path == ROOT_PATH) {
            return Err(RouteTableError::MissingRoot);
        }
        Ok(Self { login, routes })
    }

    /// The library console's table.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteTableError`] from [`RouteTable::new`].
    pub fn library() -> Result<Self, RouteTableError> {
        Self::new(LOGIN_PATH, LIBRARY_ROUTES.to_vec())
    }

    pub fn login_path(&self) -> &'static str {
        self.login
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Resolve a request: login first, then guarded entries, then not-found.
    pub fn resolve(&self, request: &NavigationRequest) -> RouteMatch<'_> {
        let path = request.path();
        if path.eq_ignore_ascii_case(self.login) {
            return RouteMatch::Login;
        }
        self.routes
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(path))
            .map_or(RouteMatch::NotFound, RouteMatch::Guarded)
    }
}
