mod domain;
mod lookup;

pub use domain::Profile;
pub use lookup::{GithubError, lookup_user};
