//! Food database lookups.
//!
//! Searches OpenFoodFacts (no API key needed) and normalizes the products it
//! returns to per-100g macros. The client sits behind [`FoodSearch`] so the
//! rest of the crate, and the tests, can swap it for a fixed list.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::MacroQuad;
use crate::planner::calculations::round1;
use crate::planner::constants::KJ_PER_KCAL;

/// Food database client configuration
#[derive(Debug, Clone)]
pub struct FoodDbConfig {
    /// Search endpoint (default: <https://world.openfoodfacts.org/cgi/search.pl>)
    pub base_url: String,
    /// Request timeout in seconds (default: 6)
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FoodDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org/cgi/search.pl".to_string(),
            timeout_secs: 6,
            user_agent: concat!("macro_coach/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A food found in the database, macros per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Product barcode, when the database has one.
    pub id: Option<String>,
    pub name: String,
    pub brand: String,
    /// Reference quantity in grams; always 100.
    pub per: u32,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
}

impl FoodRecord {
    pub fn per_100g(&self) -> MacroQuad {
        MacroQuad::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

/// Anything that can look up foods by name.
pub trait FoodSearch {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FoodRecord>>;
}

/// Blocking OpenFoodFacts search client.
pub struct OpenFoodFactsClient {
    config: FoodDbConfig,
    http_client: reqwest::blocking::Client,
}

impl OpenFoodFactsClient {
    pub fn new(config: FoodDbConfig) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

impl FoodSearch for OpenFoodFactsClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FoodRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        debug!(query, limit, url = %self.config.base_url, "searching food database");
        let page_size = limit.to_string();
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ])
            .send()?
            .error_for_status()?;

        let payload: Value = response.json()?;
        let records = normalize_products(&payload);
        debug!(query, found = records.len(), "food database search done");
        Ok(records)
    }
}

/// Read a nutriment that may be stored as a number or a numeric string.
fn number(nutriments: &Value, key: &str) -> Option<f64> {
    let value = match nutriments.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn text<'a>(product: &'a Value, key: &str) -> Option<&'a str> {
    product
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Turn a raw search payload into food records.
///
/// Products carrying none of calories, protein, carbs or fat are dropped.
pub fn normalize_products(payload: &Value) -> Vec<FoodRecord> {
    let Some(products) = payload.get("products").and_then(Value::as_array) else {
        return Vec::new();
    };

    products
        .iter()
        .filter_map(|product| {
            let nutriments = product.get("nutriments").unwrap_or(&Value::Null);

            let kcal = number(nutriments, "energy-kcal_100g")
                .or_else(|| number(nutriments, "energy_100g").map(|kj| kj / KJ_PER_KCAL));
            let protein = number(nutriments, "proteins_100g");
            let carbs = number(nutriments, "carbohydrates_100g");
            let fat = number(nutriments, "fat_100g");

            if kcal.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
                return None;
            }

            let name = text(product, "product_name")
                .or_else(|| text(product, "generic_name"))
                .or_else(|| text(product, "brands"))
                .unwrap_or("Food");

            let id = match product.get("code") {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };

            Some(FoodRecord {
                id,
                name: name.to_string(),
                brand: text(product, "brands").unwrap_or_default().to_string(),
                per: 100,
                calories: round1(kcal.unwrap_or(0.0)),
                protein: round1(protein.unwrap_or(0.0)),
                carbs: round1(carbs.unwrap_or(0.0)),
                fat: round1(fat.unwrap_or(0.0)),
                serving_size: text(product, "serving_size").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Search, treating any lookup failure as "no results".
pub fn search_or_empty(db: &dyn FoodSearch, query: &str, limit: usize) -> Vec<FoodRecord> {
    match db.search(query, limit) {
        Ok(records) => records,
        Err(e) => {
            warn!(query, error = %e, "food database search failed");
            Vec::new()
        }
    }
}
