//! Locale catalog for the console's labels and messages.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Looks up `text` in this locale's catalog.
    pub fn t(self, text: Text) -> &'static str {
        use Text::*;
        match (self, text) {
            (Locale::En, Clients) => "Clients",
            (Locale::En, New) => "New",
            (Locale::En, Search) => "Search",
            (Locale::En, Name) => "Name",
            (Locale::En, Email) => "Email",
            (Locale::En, Phone) => "Phone",
            (Locale::En, ClientCreated) => "Client created successfully.",
            (Locale::Fr, Clients) => "Clients",
            (Locale::Fr, New) => "Nouveau",
            (Locale::Fr, Search) => "Rechercher",
            (Locale::Fr, Name) => "Nom",
            (Locale::Fr, Email) => "Email",
            (Locale::Fr, Phone) => "Téléphone",
            (Locale::Fr, ClientCreated) => "Client créé avec succès.",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-gb" => Ok(Locale::En),
            "fr" | "fr-fr" => Ok(Locale::Fr),
            other => Err(ConfigError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Translatable strings used by the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Clients,
    New,
    Search,
    Name,
    Email,
    Phone,
    /// Shown after "new" allocates a record.
    ClientCreated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" en-GB ".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(
            "de".parse::<Locale>(),
            Err(ConfigError::UnknownLocale("de".into()))
        );
    }

    #[test]
    fn test_catalog_differs_per_locale() {
        assert_eq!(Locale::En.t(Text::New), "New");
        assert_eq!(Locale::Fr.t(Text::New), "Nouveau");
    }
}
