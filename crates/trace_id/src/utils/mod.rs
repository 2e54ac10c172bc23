pub mod hostname;
pub mod random;

pub use hostname::last_dot_field;
pub use random::{random_alphanumeric, random_alphanumeric_with};
