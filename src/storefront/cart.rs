use std::collections::BTreeSet;

use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::kv_store::{KeyValueStore, StorageError};
use crate::domain::pricing::{subtotal, PricedLine, TaxPolicy, Totals};

pub const CART_KEY: &str = "cart";
pub const ORDERED_GIFTS_KEY: &str = "orderedGifts";

/// Identity of a cart line: the item plus its option set.
///
/// Options are expected in name order, which [`PersistentCart::add`]
/// guarantees for every stored line.
pub fn line_key(line: &PricedLine) -> String {
    let options: Vec<String> = line
        .selected_options
        .iter()
        .map(|option| format!("{}={}", option.name, option.price.normalized()))
        .collect();
    format!("{}:{}", line.item_id, options.join("|"))
}

/// Reads `key` as JSON, treating an unreadable value as absent.
fn load_or_default<T, S>(store: &S, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!("discarding corrupt '{key}' entry: {e}");
            Ok(T::default())
        }
    }
}

/// A shopping cart that writes itself back to `S` after every change.
pub struct PersistentCart<S: KeyValueStore> {
    store: S,
    lines: Vec<PricedLine>,
}

impl<S: KeyValueStore> PersistentCart<S> {
    pub fn load(store: S) -> Result<Self, StorageError> {
        let lines = load_or_default(&store, CART_KEY)?;
        Ok(Self { store, lines })
    }

    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `line`, merging quantities with an existing line of the same key.
    /// A zero quantity is ignored.
    pub fn add(&mut self, mut line: PricedLine) -> Result<(), StorageError> {
        if line.quantity == 0 {
            return Ok(());
        }
        line.selected_options.sort_by(|a, b| a.name.cmp(&b.name));
        let key = line_key(&line);

        match self.lines.iter_mut().find(|existing| line_key(existing) == key) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
        self.save()
    }

    /// Returns `false` when no line has `key`. Zero removes the line.
    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> Result<bool, StorageError> {
        if quantity == 0 {
            return self.remove(key);
        }
        let Some(line) = self.lines.iter_mut().find(|line| line_key(line) == key) else {
            return Ok(false);
        };
        line.quantity = quantity;
        self.save()?;
        Ok(true)
    }

    pub fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let before = self.lines.len();
        self.lines.retain(|line| line_key(line) != key);
        if self.lines.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.store.remove(CART_KEY)
    }

    pub fn subtotal(&self) -> BigDecimal {
        subtotal(&self.lines)
    }

    pub fn totals(&self, policy: TaxPolicy) -> Totals {
        policy.price_lines(&self.lines)
    }

    /// Hands the lines over for a bill or order and empties the cart.
    pub fn checkout(&mut self) -> Result<Vec<PricedLine>, StorageError> {
        let lines = std::mem::take(&mut self.lines);
        self.store.remove(CART_KEY)?;
        Ok(lines)
    }

    fn save(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.lines)?;
        self.store.set(CART_KEY, &raw)
    }
}

/// Gift ids the guest has already ordered, so the shop can mark them.
pub struct OrderedGifts<S: KeyValueStore> {
    store: S,
    ids: BTreeSet<Uuid>,
}

impl<S: KeyValueStore> OrderedGifts<S> {
    pub fn load(store: S) -> Result<Self, StorageError> {
        let ids = load_or_default(&store, ORDERED_GIFTS_KEY)?;
        Ok(Self { store, ids })
    }

    /// Returns `false` if the gift was already marked.
    pub fn mark_ordered(&mut self, gift_id: Uuid) -> Result<bool, StorageError> {
        if !self.ids.insert(gift_id) {
            return Ok(false);
        }
        let raw = serde_json::to_string(&self.ids)?;
        self.store.set(ORDERED_GIFTS_KEY, &raw)?;
        Ok(true)
    }

    pub fn is_ordered(&self, gift_id: &Uuid) -> bool {
        self.ids.contains(gift_id)
    }
}
