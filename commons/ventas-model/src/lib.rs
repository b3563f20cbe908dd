//! Payload generation and reply classification for the `/ventas` load generator.
//!
//! Nothing in here does I/O: callers hand in the random source and the
//! status/body they got back.

mod reply;
mod sale;

pub use reply::{
    ESTADO_FIELD, ESTADO_OK, Failure, ReplyStatus, Verdict, classify,
    inspect_reply,
};
pub use sale::{
    Category, InvalidSale, MAX_PRICE, MAX_QUANTITY, MIN_PRICE, MIN_QUANTITY,
    PRODUCT_PREFIXES, PRODUCT_SUFFIX_LEN, SaleEvent, is_valid_product_id,
    random_product_id,
};
