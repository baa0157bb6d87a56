pub mod book;
pub mod init;
pub mod navigate;
pub mod routes;
pub mod session;
pub mod version;

pub use book::Book;
pub use init::Init;
pub use navigate::Navigate;
pub use routes::Routes;
pub use session::Session;
pub use version::Version;
