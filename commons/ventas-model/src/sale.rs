use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PRODUCT_PREFIXES: [&str; 6] = ["TV", "LAP", "PHN", "SHO", "CRM", "HOM"];
pub const PRODUCT_SUFFIX_LEN: usize = 4;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Price bounds in cents, upper bound exclusive.
const MIN_PRICE_CENTS: u32 = 100;
const MAX_PRICE_CENTS: u32 = 250_000;
pub const MIN_PRICE: f64 = MIN_PRICE_CENTS as f64 / 100.0;
pub const MAX_PRICE: f64 = MAX_PRICE_CENTS as f64 / 100.0;

pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronica,
    Ropa,
    Hogar,
    Belleza,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronica,
        Category::Ropa,
        Category::Hogar,
        Category::Belleza,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronica => "Electronica",
            Category::Ropa => "Ropa",
            Category::Hogar => "Hogar",
            Category::Belleza => "Belleza",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic sale, as accepted by `POST /ventas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEvent {
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidadVendida")]
    pub quantity_sold: i32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidSale {
    #[error("Invalid product id '{0}'. Expected '<PREFIX>-XXXX'.")]
    ProductId(String),
    #[error("Price {0} out of range [1.00, 2500.00).")]
    PriceOutOfRange(f64),
    #[error("Price {0} has more than 2 decimal places.")]
    PricePrecision(f64),
    #[error("Quantity {0} out of range [1, 10].")]
    QuantityOutOfRange(i32),
}

impl SaleEvent {
    /// Draws a fresh event from `rng`. The result always passes [`SaleEvent::validate`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
        let product_id = random_product_id(rng);
        // whole cents, so rounding never pushes the price onto the upper bound
        let cents = rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
        let price = cents as f64 / 100.0;
        let quantity_sold = rng.random_range(MIN_QUANTITY..=MAX_QUANTITY);
        Self {
            category,
            product_id,
            price,
            quantity_sold,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidSale> {
        if !is_valid_product_id(&self.product_id) {
            return Err(InvalidSale::ProductId(self.product_id.clone()));
        }
        if !(MIN_PRICE..MAX_PRICE).contains(&self.price) {
            return Err(InvalidSale::PriceOutOfRange(self.price));
        }
        let scaled = self.price * 100.0;
        if (scaled - scaled.round()).abs() > 1e-6 {
            return Err(InvalidSale::PricePrecision(self.price));
        }
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity_sold) {
            return Err(InvalidSale::QuantityOutOfRange(self.quantity_sold));
        }
        Ok(())
    }
}

/// e.g. `TV-AB12`
pub fn random_product_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = PRODUCT_PREFIXES[rng.random_range(0..PRODUCT_PREFIXES.len())];
    let mut id = String::with_capacity(prefix.len() + 1 + PRODUCT_SUFFIX_LEN);
    id.push_str(prefix);
    id.push('-');
    for _ in 0..PRODUCT_SUFFIX_LEN {
        let idx = rng.random_range(0..SUFFIX_CHARSET.len());
        id.push(SUFFIX_CHARSET[idx] as char);
    }
    id
}

pub fn is_valid_product_id(id: &str) -> bool {
    let Some((prefix, suffix)) = id.split_once('-') else {
        return false;
    };
    PRODUCT_PREFIXES.contains(&prefix)
        && suffix.len() == PRODUCT_SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
