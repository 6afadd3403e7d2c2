//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generative_fallback;
pub mod route_query;
pub mod site_info_lookup;

#[cfg(test)]
pub(crate) mod test_doubles;
