// ABOUTME: Tool module - defines tools, definitions, registry, and execution.
// ABOUTME: Core abstraction the test harness drives fixtures through.

mod definition;
mod registry;
mod result;
mod traits;

pub use definition::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
