//! Execution role model: names, policies and the identity client seam

pub mod policy;
pub mod provider;
pub mod role;
pub mod validation;

pub use policy::{Effect, PolicyDocument, Principal, Statement};
pub use provider::IdentityClient;
pub use role::{RoleArn, RoleName, RoleSpec};
pub use validation::IdentityValidationError;
