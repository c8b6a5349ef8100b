use std::fmt;

use thiserror::Error;

/// Insurers that can be quoted, in the order the provider picker lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    LaPositiva,
    Mapfre,
    Rimac,
    Protecta,
    Pacifico,
    Qualitas,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{0}'")]
pub struct UnknownProviderError(pub String);

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::LaPositiva,
        Provider::Mapfre,
        Provider::Rimac,
        Provider::Protecta,
        Provider::Pacifico,
        Provider::Qualitas,
    ];

    pub fn all() -> &'static [Provider] {
        &Self::ALL
    }

    /// Label shown in the picker and printed in the quote summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaPositiva => "LA POSITIVA",
            Self::Mapfre => "MAPFRE",
            Self::Rimac => "RIMAC",
            Self::Protecta => "PROTECTA",
            Self::Pacifico => "PACIFICO",
            Self::Qualitas => "QUALITAS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Provider {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Provider {
    type Error = UnknownProviderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| UnknownProviderError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_label() {
        for provider in Provider::all() {
            assert_eq!(Provider::parse(provider.as_str()), Some(*provider));
        }
    }

    #[test]
    fn parse_is_exact_match() {
        assert_eq!(Provider::parse("rimac"), None);
        assert_eq!(Provider::parse(" RIMAC"), None);
        assert_eq!(Provider::parse(""), None);
    }

    #[test]
    fn try_from_reports_offending_value() {
        let err = Provider::try_from("ACME").unwrap_err();

        assert_eq!(err, UnknownProviderError("ACME".to_string()));
        assert_eq!(err.to_string(), "unknown provider 'ACME'");
    }

    #[test]
    fn picker_order_is_fixed() {
        let labels: Vec<&str> = Provider::all().iter().map(Provider::as_str).collect();

        assert_eq!(
            labels,
            vec!["LA POSITIVA", "MAPFRE", "RIMAC", "PROTECTA", "PACIFICO", "QUALITAS"]
        );
    }
}
