/// Hard bound on serialization recursion. Type shapes cannot rule out
/// value-level cycles, so every container routine checks its depth against
/// this limit and fails with [`Error::MaxDepthExceeded`](crate::Error)
/// instead of overflowing the call stack.
pub const MAX_DEPTH: usize = 256;

/// Spaces per indentation level in pretty-printed output.
pub const INDENT_WIDTH: usize = 2;
