use super::credentials::CredentialProvider;
use super::routes::{RouteDescriptor, RouteMatch, RouteTable, LOGIN_PATH};

/// Outcome of guarding a single descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect { to: &'static str },
}

/// Outcome of navigating to a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed(RouteMatch),
    Redirect { from: String, to: &'static str },
    /// No descriptor matches. Unmatched paths carry no
    ///  auth requirement, so they are never redirected.
    NotFound { path: String },
}

/// Before-navigation login gate.
///  A pure function of the route table and whatever the
///  credential provider reports at the time of the call.
#[derive(Debug, Clone)]
pub struct Guard<C> {
    routes: RouteTable,
    credentials: C,
    login_path: &'static str,
}

impl<C: CredentialProvider> Guard<C> {
    pub fn new(routes: RouteTable, credentials: C) -> Self {
        let login_path = routes
            .by_name("login")
            .map(|route| route.path)
            .unwrap_or(LOGIN_PATH);
        Self {
            routes,
            credentials,
            login_path,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    pub fn evaluate(&self, route: &RouteDescriptor) -> Decision {
        if !route.requires_auth || self.credentials.has_token() {
            Decision::Proceed
        } else {
            Decision::Redirect {
                to: self.login_path,
            }
        }
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let Some(matched) = self.routes.resolve(path) else {
            tracing::debug!(path, "no route matches");
            return Navigation::NotFound {
                path: path.to_string(),
            };
        };

        match self.evaluate(&matched.route) {
            Decision::Proceed => {
                tracing::debug!(path, route = matched.route.name, "navigation allowed");
                Navigation::Proceed(matched)
            }
            Decision::Redirect { to } => {
                tracing::debug!(path, route = matched.route.name, to, "no session token, redirecting");
                Navigation::Redirect {
                    from: path.to_string(),
                    to,
                }
            }
        }
    }
}
