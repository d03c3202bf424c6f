// ABOUTME: Root module for e2e-tools - mock tools for agent end-to-end tests.
// ABOUTME: Re-exports all public types from submodules.

pub mod error;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::{E2eError, ToolError};
