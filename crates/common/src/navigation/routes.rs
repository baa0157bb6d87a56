use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Where unauthenticated navigations are sent
pub const LOGIN_PATH: &str = "/login";

/// The views a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    Library,
    Search,
    SearchDetail,
    Login,
    Register,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "HomeView",
            View::Library => "LibraryView",
            View::Search => "SearchView",
            View::SearchDetail => "SearchDetailView",
            View::Login => "LoginView",
            View::Register => "RegisterView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One navigable path and its access requirement.
///  Segments starting with `:` bind a named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: false,
        }
    }

    pub const fn protected(self) -> Self {
        Self {
            requires_auth: true,
            ..self
        }
    }

    /// Match a concrete path against this descriptor's pattern,
    ///  returning the bound parameters on success.
    ///  Static segments compare case-insensitively and a single trailing
    ///  slash is ignored, but empty segments (`//library`) never match.
    ///  Parameter values must be non-empty and are percent-decoded;
    ///  a value that doesn't decode to UTF-8 is kept as written.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern = segments(self.path);
        let target = segments(strip_query_and_fragment(path));
        if pattern.len() != target.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(target.iter()) {
            match expected.strip_prefix(':') {
                Some(_) if actual.is_empty() => return None,
                Some(name) => {
                    params.insert(name.to_string(), decode_param(actual));
                }
                None if expected.eq_ignore_ascii_case(actual) => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

fn decode_param(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// A descriptor together with the parameters bound by a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteDescriptor,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered, immutable set of route descriptors.
///  Resolution picks the first descriptor that matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                route: *route,
                params,
            })
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            RouteDescriptor::new("/", "home", View::Home),
            RouteDescriptor::new("/library", "library", View::Library).protected(),
            RouteDescriptor::new("/search", "search", View::Search).protected(),
            RouteDescriptor::new("/search/:id", "search-detail", View::SearchDetail).protected(),
            RouteDescriptor::new(LOGIN_PATH, "login", View::Login),
            RouteDescriptor::new("/register", "register", View::Register),
        ])
    }
}
