use std::{cmp::Ordering, fmt};

use super::Provider;

/// A provider's offer. `price == None` means the provider declined to quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub provider: Provider,
    pub price: Option<i64>,
}

impl Quote {
    pub fn new(
        provider: Provider,
        price: Option<i64>,
    ) -> Self {
        Self { provider, price }
    }

    pub fn declined(provider: Provider) -> Self {
        Self {
            provider,
            price: None,
        }
    }
}

/// Renders the line used both in the on-screen list and in the copied summary.
impl fmt::Display for Quote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.price {
            Some(price) => write!(f, "{} S/ {}", self.provider, price),
            None => write!(f, "{} NO COTIZA", self.provider),
        }
    }
}

/// Ascending by price, declined quotes last.
///
/// Declined quotes compare equal to each other, so a stable sort keeps their
/// insertion order.
pub fn display_order(
    a: &Quote,
    b: &Quote,
) -> Ordering {
    match (a.price, b.price) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_priced_quote() {
        let quote = Quote::new(Provider::Rimac, Some(124));

        assert_eq!(quote.to_string(), "RIMAC S/ 124");
    }

    #[test]
    fn display_declined_quote() {
        let quote = Quote::declined(Provider::LaPositiva);

        assert_eq!(quote.to_string(), "LA POSITIVA NO COTIZA");
    }

    #[test]
    fn display_zero_price_is_still_a_price() {
        let quote = Quote::new(Provider::Mapfre, Some(0));

        assert_eq!(quote.to_string(), "MAPFRE S/ 0");
    }

    #[test]
    fn declined_sorts_after_any_price() {
        let priced = Quote::new(Provider::Mapfre, Some(i64::MAX));
        let declined = Quote::declined(Provider::Rimac);

        assert_eq!(display_order(&priced, &declined), Ordering::Less);
        assert_eq!(display_order(&declined, &priced), Ordering::Greater);
        assert_eq!(display_order(&declined, &declined), Ordering::Equal);
    }
}
