//! Browser tests for the built page.
//!
//! They need Chrome and a bundle produced by
//! `wasm-pack build packages/web --target web --out-dir ../../site/pkg`,
//! so every test is `#[ignore]`d and runs with `cargo test -p e2e -- --ignored`.

pub mod browser;
pub mod test_server;
