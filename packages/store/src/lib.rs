pub mod directory;
pub mod form;
pub mod models;
pub mod query;

pub use directory::Directory;
pub use form::{EditSession, UserForm, UserPatch};
pub use models::{Address, Company, Geo, User};
