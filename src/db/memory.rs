use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::models::{Blueprint, Point};

use super::{BlueprintStore, Result, StoreError};

type Key = (String, String);

/// Process-local store keyed by `(author, name)`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blueprints: RwLock<BTreeMap<Key, Blueprint>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with a few sample blueprints.
    pub fn seeded() -> Self {
        let store = Self::new();
        let samples = [
            Blueprint::new(
                "john",
                "house",
                vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10), Point::new(0, 10)],
            ),
            Blueprint::new("john", "garage", vec![Point::new(5, 5), Point::new(15, 5)]),
            Blueprint::new("jane", "garden", vec![Point::new(2, 2), Point::new(3, 4)]),
        ];
        {
            let mut blueprints = store.blueprints.write();
            for blueprint in samples {
                blueprints.insert(key(&blueprint.author, &blueprint.name), blueprint);
            }
        }
        store
    }
}

fn key(author: &str, name: &str) -> Key {
    (author.to_owned(), name.to_owned())
}

impl BlueprintStore for InMemoryStore {
    fn get_all(&self) -> Vec<Blueprint> {
        self.blueprints.read().values().cloned().collect()
    }

    fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let blueprints: Vec<Blueprint> = self
            .blueprints
            .read()
            .values()
            .filter(|b| b.author == author)
            .cloned()
            .collect();
        if blueprints.is_empty() {
            return Err(StoreError::author_not_found(author));
        }
        Ok(blueprints)
    }

    fn get(&self, author: &str, name: &str) -> Result<Blueprint> {
        self.blueprints
            .read()
            .get(&key(author, name))
            .cloned()
            .ok_or_else(|| StoreError::blueprint_not_found(author, name))
    }

    fn add(&self, blueprint: Blueprint) -> Result<()> {
        let mut blueprints = self.blueprints.write();
        let key = key(&blueprint.author, &blueprint.name);
        if blueprints.contains_key(&key) {
            return Err(StoreError::already_exists(&blueprint.author, &blueprint.name));
        }
        log::debug!("storing blueprint {}/{}", blueprint.author, blueprint.name);
        blueprints.insert(key, blueprint);
        Ok(())
    }

    fn add_point(&self, author: &str, name: &str, point: Point) -> Result<()> {
        let mut blueprints = self.blueprints.write();
        let Some(blueprint) = blueprints.get_mut(&key(author, name)) else {
            return Err(StoreError::blueprint_not_found(author, name));
        };
        log::debug!("appending ({}, {}) to {author}/{name}", point.x, point.y);
        blueprint.points.push(point);
        Ok(())
    }
}
