//! Recipe Store Module
//!
//! This module implements the in-memory mapping from city identifier to that
//! city's recipes. The store is created empty, lives for the process lifetime,
//! and is shared between request handlers through an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use utoipa::ToSchema;

use crate::content::RecipeContent;
use crate::errors::RecipeError;

/// Identifier of a recipe.
///
/// Ids come from one store-wide counter starting at 1, so they are unique
/// across every city and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl FromStr for RecipeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(RecipeId)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-submitted recipe attached to one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Store-assigned identifier
    #[schema(value_type = u64, example = 1)]
    pub id: RecipeId,
    /// Recipe text, 10 to 2000 characters
    #[schema(example = "Boil pasta for ten minutes.")]
    pub content: String,
}

/// Store statistics for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Number of cities that ever received a recipe
    pub city_count: usize,
    /// Number of recipes currently stored
    pub recipe_count: usize,
}

#[derive(Debug)]
struct Inner {
    /// city_id -> recipes in insertion order
    by_city: HashMap<String, Vec<Recipe>>,
    /// Next id to hand out
    next_id: u64,
}

/// In-memory recipe collections keyed by city identifier.
///
/// The map and the id counter sit behind a single lock: reads share it,
/// `add`, `insert` and `remove` take it exclusively.
#[derive(Debug)]
pub struct RecipeStore {
    inner: RwLock<Inner>,
}

impl RecipeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                by_city: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Recipes for a city in insertion order, empty when the city has none
    pub fn list(&self, city_id: &str) -> Vec<Recipe> {
        self.read()
            .by_city
            .get(city_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Get a single recipe by id
    pub fn get(&self, city_id: &str, recipe_id: RecipeId) -> Option<Recipe> {
        self.read()
            .by_city
            .get(city_id)
            .and_then(|recipes| recipes.iter().find(|r| r.id == recipe_id))
            .cloned()
    }

    /// Validate `content` and append it to the city's recipes.
    ///
    /// Nothing is mutated when validation fails.
    pub fn add(&self, city_id: &str, content: impl Into<String>) -> Result<Recipe, RecipeError> {
        let content = RecipeContent::new(content.into())?;
        Ok(self.insert(city_id, content))
    }

    /// Append already validated content to the city's recipes
    pub fn insert(&self, city_id: &str, content: RecipeContent) -> Recipe {
        let mut inner = self.write();

        let recipe = Recipe {
            id: RecipeId(inner.next_id),
            content: content.into_inner(),
        };
        inner.next_id += 1;

        inner
            .by_city
            .entry(city_id.to_string())
            .or_default()
            .push(recipe.clone());

        recipe
    }

    /// Remove one recipe, keeping the order of the rest
    pub fn remove(&self, city_id: &str, recipe_id: RecipeId) -> Result<(), RecipeError> {
        let mut inner = self.write();

        let recipes = inner
            .by_city
            .get_mut(city_id)
            .ok_or_else(|| RecipeError::CityNotFound {
                city_id: city_id.to_string(),
            })?;

        let index = recipes
            .iter()
            .position(|r| r.id == recipe_id)
            .ok_or_else(|| RecipeError::RecipeNotFound {
                city_id: city_id.to_string(),
                recipe_id,
            })?;

        recipes.remove(index);
        Ok(())
    }

    /// Get store statistics
    pub fn stats(&self) -> StoreStats {
        let inner = self.read();
        StoreStats {
            city_count: inner.by_city.len(),
            recipe_count: inner.by_city.values().map(Vec::len).sum(),
        }
    }

    // No operation can panic while holding the lock, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}
