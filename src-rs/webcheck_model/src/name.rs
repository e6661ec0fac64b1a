use std::{fmt, ops::Deref};

/// Declares a string newtype used to name something in a test specification.
macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "` from the given string.")]
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Builds an optional name, treating an empty string as no name.
            #[must_use]
            pub fn non_empty(name: impl Into<String>) -> Option<Self> {
                let name = name.into();
                if name.is_empty() {
                    None
                } else {
                    Some(Self(name))
                }
            }
        }

        impl Deref for $name {
            type Target = String;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

name_type! {
    /// The import name of a page, such as `page_import_name`.
    PageName
}

name_type! {
    /// The name of an element, either within a page or within a step's scope.
    ElementName
}

name_type! {
    /// The name of a step, both as a key in a test and as an import target.
    StepName
}

name_type! {
    /// The name of an external data provider.
    DataProviderName
}

name_type! {
    /// The name of a test.
    TestName
}
