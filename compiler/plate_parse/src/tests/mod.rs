//! Parser tests.
//!
//! - `builder`: programs built from token vectors and from source text
//! - `errors`: every syntax error, its message, span and code
//! - `clause`: balanced clause extraction, including property tests
