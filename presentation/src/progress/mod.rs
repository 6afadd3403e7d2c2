//! Progress display while a query moves down the fallback chain

pub mod reporter;
