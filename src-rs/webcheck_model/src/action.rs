use std::fmt;

use crate::{identifier::Identifier, value::Value};

/// An action that acts on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionVerb {
    /// `click`
    Click,
    /// `submit`
    Submit,
    /// `wait-for`
    WaitFor,
}

/// An action that takes no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoArgumentsVerb {
    /// `reload`
    Reload,
    /// `back`
    Back,
    /// `forward`
    Forward,
}

impl fmt::Display for InteractionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::WaitFor => "wait-for",
        })
    }
}

impl fmt::Display for NoArgumentsVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reload => "reload",
            Self::Back => "back",
            Self::Forward => "forward",
        })
    }
}

/// What an action does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// `wait <duration>`
    Wait {
        /// The duration as written.
        duration: String,
    },
    /// `reload`, `back` or `forward`
    NoArguments(NoArgumentsVerb),
    /// `click`, `submit` or `wait-for` on an element
    Interaction {
        /// The verb.
        verb: InteractionVerb,
        /// The element acted on.
        identifier: Identifier,
    },
    /// `set <identifier> to <value>`
    Input {
        /// The element receiving the input.
        identifier: Identifier,
        /// The value entered.
        value: Value,
    },
}

/// One action of a step, along with the text it was written as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    source: String,
    kind: ActionKind,
}

impl Action {
    /// Creates a new action.
    #[must_use]
    pub fn new(source: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// Creates a `wait` action.
    #[must_use]
    pub fn wait(source: impl Into<String>, duration: impl Into<String>) -> Self {
        let duration = duration.into();
        Self::new(source, ActionKind::Wait { duration })
    }

    /// Creates an action that takes no arguments.
    #[must_use]
    pub fn no_arguments(source: impl Into<String>, verb: NoArgumentsVerb) -> Self {
        Self::new(source, ActionKind::NoArguments(verb))
    }

    /// Creates an interaction action.
    #[must_use]
    pub fn interaction(
        source: impl Into<String>,
        verb: InteractionVerb,
        identifier: Identifier,
    ) -> Self {
        Self::new(source, ActionKind::Interaction { verb, identifier })
    }

    /// Creates an input action.
    #[must_use]
    pub fn input(source: impl Into<String>, identifier: Identifier, value: Value) -> Self {
        Self::new(source, ActionKind::Input { identifier, value })
    }

    /// Returns the text the action was written as.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns what the action does.
    #[must_use]
    pub const fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Returns the element the action acts on, if any.
    #[must_use]
    pub const fn identifier(&self) -> Option<&Identifier> {
        match &self.kind {
            ActionKind::Interaction { identifier, .. } | ActionKind::Input { identifier, .. } => {
                Some(identifier)
            }
            ActionKind::Wait { .. } | ActionKind::NoArguments(_) => None,
        }
    }

    /// Returns the value entered by an input action.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match &self.kind {
            ActionKind::Input { value, .. } => Some(value),
            ActionKind::Wait { .. }
            | ActionKind::NoArguments(_)
            | ActionKind::Interaction { .. } => None,
        }
    }

    /// Returns this action acting on `identifier` instead.
    ///
    /// Actions without an identifier are returned unchanged.
    #[must_use]
    pub fn with_identifier(mut self, new_identifier: Identifier) -> Self {
        match &mut self.kind {
            ActionKind::Interaction { identifier, .. } | ActionKind::Input { identifier, .. } => {
                *identifier = new_identifier;
            }
            ActionKind::Wait { .. } | ActionKind::NoArguments(_) => {}
        }
        self
    }

    /// Returns this input action entering `value` instead.
    ///
    /// Other actions are returned unchanged.
    #[must_use]
    pub fn with_value(mut self, new_value: Value) -> Self {
        if let ActionKind::Input { value, .. } = &mut self.kind {
            *value = new_value;
        }
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_identifier_keeps_source_and_verb() {
        let action = Action::interaction(
            "click $elements.button",
            InteractionVerb::Click,
            Identifier::element_reference("button"),
        );

        let rebuilt = action.with_identifier(Identifier::css(".button"));

        let expected = ActionKind::Interaction {
            verb: InteractionVerb::Click,
            identifier: Identifier::css(".button"),
        };
        assert_eq!(rebuilt.source(), "click $elements.button");
        assert_eq!(rebuilt.kind(), &expected);
    }

    #[test]
    fn wait_action_has_nothing_to_replace() {
        let action = Action::wait("wait 1", "1");

        assert_eq!(action.identifier(), None);
        assert_eq!(action.value(), None);
        assert_eq!(action.clone().with_identifier(Identifier::css(".x")), action);
    }
}
