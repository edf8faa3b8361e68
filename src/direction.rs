/// The end of a collection an operation applies to.
///
/// Symmetric operations (`peek`, and the deque's two-ended removal) take a
/// `Direction` instead of existing twice under different names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The head side of the chain.
    Front,
    /// The tail side of the chain.
    Back,
}
