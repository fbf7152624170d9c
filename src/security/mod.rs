/// Password hashing and signed-token issuance/verification
pub mod password;
pub mod token;

pub use token::{Claims, TokenService};
