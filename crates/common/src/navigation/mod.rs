mod credentials;
mod guard;
mod routes;

pub use credentials::{CredentialProvider, StoredToken};
pub use guard::{Decision, Guard, Navigation};
pub use routes::{RouteDescriptor, RouteMatch, RouteTable, View, LOGIN_PATH};
