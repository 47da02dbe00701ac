/*! Integration tests for attrmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: the attribute-accessible map and its name-map invariants
 * - value: the Value enum, conversions, and comparisons
 * - list / set: the self-wrapping containers
 * - json: conversion between plain JSON trees and wrapped values
 * - hooks: operation interception through HookedMap
 * - autosave: the JSON file persistence layer
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("attrmap=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod autosave;
mod hooks;
mod value;
