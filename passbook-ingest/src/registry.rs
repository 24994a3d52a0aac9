//! Process-wide tag -> strategy mapping, built once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use passbook_core::BankTag;

use crate::parsers;
use crate::strategy::{ColumnStrategy, ExtractionStrategy};

pub struct StrategyRegistry {
    strategies: HashMap<BankTag, Box<dyn ExtractionStrategy>>,
}

impl StrategyRegistry {
    fn builtin() -> Self {
        let mut registry = Self {
            strategies: HashMap::new(),
        };
        for layout in parsers::layouts() {
            registry.register(Box::new(ColumnStrategy::new(layout)));
        }
        registry
    }

    fn register(&mut self, strategy: Box<dyn ExtractionStrategy>) {
        let bank = strategy.bank();
        let previous = self.strategies.insert(bank, strategy);
        debug_assert!(previous.is_none(), "duplicate strategy for {bank}");
    }

    pub fn get(&self, bank: BankTag) -> Option<&dyn ExtractionStrategy> {
        self.strategies.get(&bank).map(|s| s.as_ref())
    }

    pub fn supports(&self, bank: BankTag) -> bool {
        self.strategies.contains_key(&bank)
    }

    /// Tags with a registered strategy, in catalog order
    pub fn banks(&self) -> Vec<BankTag> {
        BankTag::ALL
            .into_iter()
            .filter(|tag| self.supports(*tag))
            .collect()
    }
}

static REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::builtin);

pub fn registry() -> &'static StrategyRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_bank_but_jk_has_a_strategy() {
        let registry = registry();
        for tag in BankTag::ALL {
            assert_eq!(registry.supports(tag), tag != BankTag::Jk, "{tag}");
        }
        assert_eq!(registry.banks().len(), 18);
    }

    #[test]
    fn test_lookup_returns_the_matching_bank() {
        for tag in registry().banks() {
            assert_eq!(registry().get(tag).unwrap().bank(), tag);
        }
        assert!(registry().get(BankTag::Jk).is_none());
    }
}
