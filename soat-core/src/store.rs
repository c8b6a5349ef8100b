//! The list of quotes collected for the current vehicle.
//!
//! Quotes are kept in insertion order. Anything shown to the user goes
//! through [`QuoteStore::displayed`], which sorts a fresh view on every call,
//! and positional removal is resolved against that same view.

use tracing::debug;

use crate::models::{Provider, Quote, display_order};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn contains(
        &self,
        provider: Provider,
    ) -> bool {
        self.quotes.iter().any(|q| q.provider == provider)
    }

    /// Quotes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Appends a quote. Returns `false` (and stores nothing) when the
    /// provider already has one.
    pub fn add(
        &mut self,
        quote: Quote,
    ) -> bool {
        if self.contains(quote.provider) {
            debug!(provider = %quote.provider, "provider already quoted");
            return false;
        }
        debug!(%quote, "quote added");
        self.quotes.push(quote);
        true
    }

    /// Store positions in display order.
    fn display_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.quotes.len()).collect();
        positions.sort_by(|&a, &b| display_order(&self.quotes[a], &self.quotes[b]));
        positions
    }

    /// Quotes sorted for display: cheapest first, declined last.
    pub fn displayed(&self) -> Vec<&Quote> {
        self.display_positions()
            .into_iter()
            .map(|i| &self.quotes[i])
            .collect()
    }

    /// Removes the quote shown at `index` in [`displayed`](Self::displayed).
    pub fn remove_displayed(
        &mut self,
        index: usize,
    ) -> Option<Quote> {
        let position = *self.display_positions().get(index)?;
        let removed = self.quotes.remove(position);
        debug!(index, quote = %removed, "quote removed by displayed index");
        Some(removed)
    }

    pub fn remove_provider(
        &mut self,
        provider: Provider,
    ) -> Option<Quote> {
        let position = self.quotes.iter().position(|q| q.provider == provider)?;
        let removed = self.quotes.remove(position);
        debug!(quote = %removed, "quote removed");
        Some(removed)
    }

    /// Providers without a quote yet, in picker order.
    pub fn available_providers(&self) -> Vec<Provider> {
        Provider::all()
            .iter()
            .copied()
            .filter(|p| !self.contains(*p))
            .collect()
    }

    pub fn clear(&mut self) {
        self.quotes.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(quotes: &[(Provider, Option<i64>)]) -> QuoteStore {
        let mut store = QuoteStore::new();
        for (provider, price) in quotes {
            assert!(store.add(Quote::new(*provider, *price)));
        }
        store
    }

    fn providers(quotes: &[&Quote]) -> Vec<Provider> {
        quotes.iter().map(|q| q.provider).collect()
    }

    #[test]
    fn displayed_sorts_by_price_with_declined_last() {
        let store = store_with(&[
            (Provider::Mapfre, Some(50)),
            (Provider::Rimac, None),
            (Provider::Pacifico, Some(20)),
        ]);

        assert_eq!(
            providers(&store.displayed()),
            vec![Provider::Pacifico, Provider::Mapfre, Provider::Rimac]
        );
    }

    #[test]
    fn displayed_keeps_insertion_order_among_declined() {
        let store = store_with(&[
            (Provider::Qualitas, None),
            (Provider::Mapfre, Some(10)),
            (Provider::LaPositiva, None),
            (Provider::Rimac, None),
        ]);

        assert_eq!(
            providers(&store.displayed()),
            vec![
                Provider::Mapfre,
                Provider::Qualitas,
                Provider::LaPositiva,
                Provider::Rimac
            ]
        );
    }

    #[test]
    fn displayed_does_not_reorder_storage() {
        let store = store_with(&[(Provider::Mapfre, Some(50)), (Provider::Rimac, Some(20))]);

        let _ = store.displayed();
        let stored: Vec<Provider> = store.iter().map(|q| q.provider).collect();

        assert_eq!(stored, vec![Provider::Mapfre, Provider::Rimac]);
    }

    #[test]
    fn remove_displayed_uses_sorted_position() {
        let mut store = store_with(&[
            (Provider::Mapfre, Some(50)),
            (Provider::Rimac, None),
            (Provider::Pacifico, Some(20)),
        ]);

        // Display is [PACIFICO, MAPFRE, RIMAC]; index 0 is PACIFICO even
        // though it was inserted last.
        let removed = store.remove_displayed(0);

        assert_eq!(removed, Some(Quote::new(Provider::Pacifico, Some(20))));
        assert_eq!(
            providers(&store.displayed()),
            vec![Provider::Mapfre, Provider::Rimac]
        );
    }

    #[test]
    fn remove_displayed_out_of_range_is_noop() {
        let mut store = store_with(&[(Provider::Mapfre, Some(50))]);

        assert_eq!(store.remove_displayed(1), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_provider_by_identity() {
        let mut store = store_with(&[(Provider::Mapfre, Some(50)), (Provider::Rimac, Some(20))]);

        assert_eq!(
            store.remove_provider(Provider::Mapfre),
            Some(Quote::new(Provider::Mapfre, Some(50)))
        );
        assert_eq!(store.remove_provider(Provider::Mapfre), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_second_quote_for_same_provider() {
        let mut store = store_with(&[(Provider::Rimac, Some(20))]);

        assert!(!store.add(Quote::new(Provider::Rimac, Some(10))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.displayed()[0].price, Some(20));
    }

    #[test]
    fn available_providers_excludes_quoted_in_fixed_order() {
        let store = store_with(&[(Provider::Rimac, Some(20)), (Provider::LaPositiva, None)]);

        assert_eq!(
            store.available_providers(),
            vec![
                Provider::Mapfre,
                Provider::Protecta,
                Provider::Pacifico,
                Provider::Qualitas
            ]
        );
    }

    #[test]
    fn available_providers_for_every_prefix_of_additions() {
        let mut store = QuoteStore::new();
        let mut added = Vec::new();

        for provider in [
            Provider::Qualitas,
            Provider::Mapfre,
            Provider::LaPositiva,
            Provider::Pacifico,
            Provider::Rimac,
            Provider::Protecta,
        ] {
            store.add(Quote::declined(provider));
            added.push(provider);

            let expected: Vec<Provider> = Provider::all()
                .iter()
                .copied()
                .filter(|p| !added.contains(p))
                .collect();
            assert_eq!(store.available_providers(), expected);
        }

        assert!(store.available_providers().is_empty());
    }

    #[test]
    fn removing_a_quote_makes_provider_available_again() {
        let mut store = store_with(&[(Provider::Rimac, Some(20))]);

        store.remove_provider(Provider::Rimac);

        assert_eq!(store.available_providers(), Provider::all().to_vec());
    }
}
