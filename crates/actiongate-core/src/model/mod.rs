//! Rule model: principals, rule sets, evaluation requests.

pub mod principal;
pub mod request;
pub mod ruleset;

pub use principal::{Principal, ALL_TOKEN};
pub use request::{AccessRequest, ANY_RESOURCE, DEFAULT_CHANNEL};
pub use ruleset::RuleSet;
