use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Product identifier, assigned by the store
pub type ProductId = i64;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, immutable after creation
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Price; whole amounts render as JSON integers
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Overwrite every field except the id
    pub fn replace_with(&mut self, input: UpdateProductPut) {
        self.name = input.name;
        self.price = input.price;
    }

    /// Overwrite only the fields present in the patch
    pub fn apply_patch(&mut self, patch: UpdateProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Records the store starts with
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 1200.0),
        Product::new(2, "Headphones", 150.0),
        Product::new(3, "Keyboard", 80.0),
    ]
}

/// Client-supplied product fields, before validation.
///
/// Keeps the raw JSON values so validators can tell a missing field from
/// one sent with the wrong type (including an explicit `null`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<Value>,
    pub price: Option<Value>,
}

impl ProductInput {
    /// `name` if it is a JSON string
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// `price` if it is a JSON number that is not NaN
    pub fn price_number(&self) -> Option<f64> {
        self.price
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|price| !price.is_nan())
    }
}

impl From<Map<String, Value>> for ProductInput {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: fields.remove("name"),
            price: fields.remove("price"),
        }
    }
}

impl From<Value> for ProductInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => fields.into(),
            _ => Self::default(),
        }
    }
}

/// Validated input for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    /// Product name (non-empty)
    pub name: String,
    /// Product price
    pub price: f64,
}

/// Validated input for replacing a product (PUT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductPut {
    /// Product name (non-empty)
    pub name: String,
    /// Product price
    pub price: f64,
}

/// Validated input for partially updating a product (PATCH)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductPatch {
    /// New name, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New price, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Filters for listing products; both compose with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Keep products with `price <= max_price`
    pub max_price: Option<f64>,
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !product
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}
