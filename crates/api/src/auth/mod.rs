//! Authentication primitives.
//!
//! Identity lives in an external provider; this module only validates the
//! HS256 access tokens it issues. [`jwt::generate_access_token`] exists for
//! tests and local tooling.

pub mod jwt;
