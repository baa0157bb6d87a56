/**
 * Client for the remote book catalog.
 *  Two read-only queries (fetch a volume by id,
 *  search volumes by text) against a configurable
 *  base URL. Failures collapse to a safe default
 *  unless the caller asks for the tagged `try_*` variants.
 */
pub mod catalog;
/**
 * Static route table and the login guard that
 *  runs before every navigation.
 */
pub mod navigation;
/**
 * Tiny persisted key-value store, backed by a
 *  TOML file. Holds the session token.
 */
pub mod store;

pub mod prelude {
    pub use crate::catalog::{CatalogClient, CatalogError, CatalogRequest, DEFAULT_CATALOG_URL};
    pub use crate::navigation::{
        CredentialProvider, Decision, Guard, Navigation, RouteDescriptor, RouteMatch, RouteTable,
        StoredToken, View,
    };
    pub use crate::store::{LocalStore, StoreError, TOKEN_KEY};
}
