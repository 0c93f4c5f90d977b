//! Folds flat node x characteristic rows into nested cards.
//!
//! Cards come out in the order their node first appears in the rows, and each
//! card's characteristic groups in the order their title first appears.

use serde_json::{Map, Value};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::database::models::{Card, CardRow, CharacteristicEntry};

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("card not found")]
    NotFound,

    #[error("invalid additionalParams on node {node_id}: {source}")]
    InvalidAdditionalParams {
        node_id: i32,
        #[source]
        source: serde_json::Error,
    },
}

struct CardBuilder {
    card: Card,
    group_index: HashMap<String, usize>,
}

impl CardBuilder {
    fn push(&mut self, entry: CharacteristicEntry) {
        match self.group_index.get(&entry.title) {
            Some(&i) => self.card.characteristics[i].push(entry),
            None => {
                self.group_index
                    .insert(entry.title.clone(), self.card.characteristics.len());
                self.card.characteristics.push(vec![entry]);
            }
        }
    }
}

fn parse_additional_params(
    node_id: i32,
    raw: Option<String>,
) -> Result<Option<Map<String, Value>>, MapError> {
    match raw {
        None => Ok(None),
        Some(text) => serde_json::from_str::<Option<Map<String, Value>>>(&text)
            .map_err(|source| MapError::InvalidAdditionalParams { node_id, source }),
    }
}

/// Group rows into cards. Zero rows is `MapError::NotFound`; a single
/// unparsable `additionalParams` payload fails the whole mapping.
pub fn map_card_rows(rows: Vec<CardRow>) -> Result<Vec<Card>, MapError> {
    if rows.is_empty() {
        return Err(MapError::NotFound);
    }

    let mut order: Vec<i32> = Vec::new();
    let mut builders: HashMap<i32, CardBuilder> = HashMap::new();

    for row in rows {
        let CardRow {
            node_id,
            title,
            node_description,
            created_at,
            updated_at,
            removed_at,
            images,
            node_type,
            node_type_description,
            characteristic,
            characteristic_value,
            additional_params,
            characteristic_description,
        } = row;

        // Null characteristic: node exists but has no values (by-id LEFT JOIN)
        let entry = match characteristic {
            Some(ch_title) => Some(CharacteristicEntry {
                title: ch_title,
                value: characteristic_value.unwrap_or_default(),
                additional_params: parse_additional_params(node_id, additional_params)?,
                description: characteristic_description,
            }),
            None => None,
        };

        let builder = match builders.entry(node_id) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                order.push(node_id);
                slot.insert(CardBuilder {
                    card: Card {
                        node_id,
                        title,
                        node_description,
                        created_at,
                        updated_at,
                        removed_at,
                        images,
                        node_type,
                        node_type_description,
                        characteristics: Vec::new(),
                    },
                    group_index: HashMap::new(),
                })
            }
        };

        if let Some(entry) = entry {
            builder.push(entry);
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|id| builders.remove(&id))
        .map(|b| b.card)
        .collect())
}
