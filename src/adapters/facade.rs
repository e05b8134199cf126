use std::fmt;

/// Sub-API of the Elomentary client selected before a read call
///
/// Selection accepts any name. Names the client does not serve are kept
/// verbatim in [`Facade::Unknown`] so misuse can be reported with the exact
/// text that was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facade {
    Contact,
    Contacts,
    Subscriptions,
    Unknown(String),
}

impl Facade {
    /// The facade name exactly as it was selected
    pub fn as_str(&self) -> &str {
        match self {
            Facade::Contact => "contact",
            Facade::Contacts => "contacts",
            Facade::Subscriptions => "subscriptions",
            Facade::Unknown(name) => name,
        }
    }

    /// Whether contact records are served by this facade
    pub fn is_contact(&self) -> bool {
        matches!(self, Facade::Contact | Facade::Contacts)
    }
}

impl Default for Facade {
    /// Nothing selected yet
    fn default() -> Self {
        Facade::Unknown(String::new())
    }
}

impl From<&str> for Facade {
    fn from(name: &str) -> Self {
        match name {
            "contact" => Facade::Contact,
            "contacts" => Facade::Contacts,
            "subscriptions" => Facade::Subscriptions,
            other => Facade::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
