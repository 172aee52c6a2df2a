use serde::{Deserialize, Serialize};

use super::Category;

/// Attributes shared by every catalog entry. Prices are integers in the smallest
/// currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "prodID")]
    pub id: String,
    #[serde(rename = "prodName")]
    pub name: String,
    pub price: u64,
    #[serde(rename = "categoryID")]
    pub category: Category,
    #[serde(rename = "smimageurl")]
    pub thumbnail_url: String,
    #[serde(rename = "bigimageurl")]
    pub image_urls: Vec<String>,
    #[serde(rename = "timestamps")]
    pub listed_at: String,
    #[serde(rename = "averageRating")]
    pub average_rating: f32,
    #[serde(rename = "totalratingsRecieved")]
    pub rating_count: u32,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    #[serde(rename = "prodID")]
    pub product_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "ratingValue")]
    pub value: u8,
    #[serde(rename = "reviewText")]
    pub review: String,
    #[serde(rename = "timestamps")]
    pub created_at: String,
}
