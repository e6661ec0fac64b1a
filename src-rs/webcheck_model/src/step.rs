use crate::{
    action::Action,
    assertion::Assertion,
    data_set::DataSetCollection,
    name::{DataProviderName, StepName},
    scope::IdentifierScope,
};

/// The contents of a step whose imports have been merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepBody {
    actions: Vec<Action>,
    assertions: Vec<Assertion>,
    identifiers: IdentifierScope,
    data_sets: Option<DataSetCollection>,
}

impl StepBody {
    /// Creates a step body with an empty scope and no data sets.
    #[must_use]
    pub fn new(actions: Vec<Action>, assertions: Vec<Assertion>) -> Self {
        Self {
            actions,
            assertions,
            identifiers: IdentifierScope::new(),
            data_sets: None,
        }
    }

    /// Returns the actions in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the assertions in order.
    #[must_use]
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Returns the identifiers declared for this step.
    #[must_use]
    pub const fn identifiers(&self) -> &IdentifierScope {
        &self.identifiers
    }

    /// Returns the data sets the step runs with, if any.
    #[must_use]
    pub const fn data_sets(&self) -> Option<&DataSetCollection> {
        self.data_sets.as_ref()
    }

    /// Returns this body with its actions replaced.
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    /// Returns this body with its assertions replaced.
    #[must_use]
    pub fn with_assertions(mut self, assertions: Vec<Assertion>) -> Self {
        self.assertions = assertions;
        self
    }

    /// Returns this body with its identifier scope replaced.
    #[must_use]
    pub fn with_identifiers(mut self, identifiers: IdentifierScope) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Returns this body running with `data_sets`.
    #[must_use]
    pub fn with_data_sets(mut self, data_sets: DataSetCollection) -> Self {
        self.data_sets = Some(data_sets);
        self
    }

    /// Returns this body with `actions` and `assertions` placed before its own.
    #[must_use]
    pub fn with_prepended(self, actions: &[Action], assertions: &[Assertion]) -> Self {
        let actions = actions.iter().cloned().chain(self.actions).collect();
        let assertions = assertions.iter().cloned().chain(self.assertions).collect();
        Self {
            actions,
            assertions,
            ..self
        }
    }
}

/// A step still waiting on a step import, a data provider import, or both.
///
/// An empty import name is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImport {
    body: StepBody,
    step_import: Option<StepName>,
    data_provider_import: Option<DataProviderName>,
}

impl PendingImport {
    /// Creates a pending import. Empty names count as no import.
    #[must_use]
    pub fn new(
        body: StepBody,
        step_import: Option<StepName>,
        data_provider_import: Option<DataProviderName>,
    ) -> Self {
        Self {
            body,
            step_import: step_import.filter(|name| !name.is_empty()),
            data_provider_import: data_provider_import.filter(|name| !name.is_empty()),
        }
    }

    /// Returns the wrapped body.
    #[must_use]
    pub const fn body(&self) -> &StepBody {
        &self.body
    }

    /// Returns the name of the step to import, if still pending.
    #[must_use]
    pub const fn step_import(&self) -> Option<&StepName> {
        self.step_import.as_ref()
    }

    /// Returns the name of the data provider to import, if still pending.
    #[must_use]
    pub const fn data_provider_import(&self) -> Option<&DataProviderName> {
        self.data_provider_import.as_ref()
    }

    /// Returns `true` while either import is pending.
    #[must_use]
    pub const fn requires_resolution(&self) -> bool {
        self.step_import.is_some() || self.data_provider_import.is_some()
    }

    /// Returns this pending import wrapping `body` instead.
    #[must_use]
    pub fn with_body(self, body: StepBody) -> Self {
        Self { body, ..self }
    }

    /// Returns this pending import with the step import done.
    #[must_use]
    pub fn without_step_import(mut self) -> Self {
        self.step_import = None;
        self
    }

    /// Returns this pending import with the data provider import done.
    #[must_use]
    pub fn without_data_provider_import(mut self) -> Self {
        self.data_provider_import = None;
        self
    }

    /// Turns this into a step, collapsing to [`Step::Resolved`] once nothing is
    /// pending.
    #[must_use]
    pub fn into_step(self) -> Step {
        if self.requires_resolution() {
            Step::PendingImport(self)
        } else {
            Step::Resolved(self.body)
        }
    }
}

/// A step of a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A step with nothing left to import.
    Resolved(StepBody),
    /// A step still waiting on imports.
    PendingImport(PendingImport),
}

impl Step {
    /// Creates a resolved step with an empty scope and no data sets.
    #[must_use]
    pub fn new(actions: Vec<Action>, assertions: Vec<Assertion>) -> Self {
        Self::Resolved(StepBody::new(actions, assertions))
    }

    /// Creates a step waiting on the given imports.
    ///
    /// The step is kept as [`Step::PendingImport`] even when both names are
    /// empty; resolution collapses it.
    #[must_use]
    pub fn pending_import(
        body: StepBody,
        step_import: impl Into<String>,
        data_provider_import: impl Into<String>,
    ) -> Self {
        Self::PendingImport(PendingImport::new(
            body,
            StepName::non_empty(step_import),
            DataProviderName::non_empty(data_provider_import),
        ))
    }

    /// Returns the body, whether or not imports are pending.
    #[must_use]
    pub const fn body(&self) -> &StepBody {
        match self {
            Self::Resolved(body) => body,
            Self::PendingImport(pending) => pending.body(),
        }
    }

    /// Returns `true` if the step is waiting on an import.
    #[must_use]
    pub const fn requires_resolution(&self) -> bool {
        match self {
            Self::Resolved(_) => false,
            Self::PendingImport(pending) => pending.requires_resolution(),
        }
    }

    /// Returns this step with the identifier scope of its body replaced.
    #[must_use]
    pub fn with_identifiers(self, identifiers: IdentifierScope) -> Self {
        match self {
            Self::Resolved(body) => Self::Resolved(body.with_identifiers(identifiers)),
            Self::PendingImport(pending) => {
                let body = pending.body.with_identifiers(identifiers);
                Self::PendingImport(PendingImport { body, ..pending })
            }
        }
    }
}

impl From<StepBody> for Step {
    fn from(body: StepBody) -> Self {
        Self::Resolved(body)
    }
}
