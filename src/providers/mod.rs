pub mod fixture;
pub mod http_provider;
pub mod util;

pub use fixture::FixtureTransactionSource;
pub use http_provider::HttpTransactionSource;
