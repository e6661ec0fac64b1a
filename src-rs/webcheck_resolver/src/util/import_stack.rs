use webcheck_model::StepName;

/// The chain of step imports currently being resolved, innermost last.
///
/// The stack is never mutated. Each level of a recursive import resolution
/// pushes onto its own copy, which borrows the level below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportStack<'a> {
    top: Option<(&'a StepName, &'a ImportStack<'a>)>,
}

impl<'a> ImportStack<'a> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None }
    }

    /// Returns a stack with `name` on top of this one.
    #[must_use]
    pub const fn push(&'a self, name: &'a StepName) -> Self {
        Self {
            top: Some((name, self)),
        }
    }

    /// Finds a circular import starting from the given name.
    ///
    /// If `name` is already on the stack, returns the names from its first
    /// occurrence up to the top of the stack, followed by `name` itself.
    /// The chain is only collected once a cycle is found.
    #[must_use]
    pub fn find_circular_import(&self, name: &StepName) -> Option<Vec<StepName>> {
        let depth = self.iter().position(|item| item == name)?;

        let mut circular_import: Vec<_> = self.iter().take(depth + 1).cloned().collect();
        circular_import.reverse();
        circular_import.push(name.clone());

        Some(circular_import)
    }

    /// Iterates from the top of the stack downwards.
    fn iter(&self) -> impl Iterator<Item = &'a StepName> {
        std::iter::successors(self.top, |(_, below)| below.top).map(|(name, _)| name)
    }
}
