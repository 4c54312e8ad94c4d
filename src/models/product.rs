use serde::{Serialize, Serializer};

use crate::error::{AppError, Result};

use super::{CellValue, SheetRow};

/// A product id as it appears in the sheet. Numeric cells serialize as JSON
/// numbers and text cells as strings; lookups compare the cell text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductId(CellValue);

impl ProductId {
    pub fn as_text(&self) -> &str {
        self.0.as_text().trim()
    }
}

impl From<CellValue> for ProductId {
    fn from(cell: CellValue) -> Self {
        Self(cell)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.0 {
            CellValue::Int(id, _) => serializer.serialize_i64(*id),
            CellValue::Float(id, _) => serializer.serialize_f64(*id),
            CellValue::Text(id) => serializer.serialize_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub vendor: String,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub sub_category: String,
    pub price: f64,
    pub image_url: String,
    pub details: String,
}

impl Product {
    pub fn from_row(row: &SheetRow) -> Result<Self> {
        Ok(Self {
            id: required(row, "id")?.clone().into(),
            vendor: required(row, "vendor")?.to_string(),
            name: required(row, "name")?.to_string(),
            category: required(row, "category")?.to_string(),
            gender: required(row, "gender")?.to_string(),
            sub_category: required(row, "subCategory")?.to_string(),
            price: parse_price(required(row, "price")?)?,
            image_url: required(row, "imageUrl")?.to_string(),
            details: required(row, "details")?.to_string(),
        })
    }
}

fn required<'a>(row: &'a SheetRow, field: &str) -> Result<&'a CellValue> {
    row.get(field)
        .ok_or_else(|| AppError::MalformedRow(format!("missing field `{}`", field)))
}

fn parse_price(cell: &CellValue) -> Result<f64> {
    let text = cell.to_string().replace('$', "");
    text.trim()
        .parse()
        .map_err(|_| AppError::MalformedRow(format!("invalid price `{}`", cell)))
}

/// Product as it appears in listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub vendor: String,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub sub_category: String,
    pub price: f64,
    pub image_url: String,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            vendor: product.vendor,
            name: product.name,
            category: product.category,
            gender: product.gender,
            sub_category: product.sub_category,
            price: product.price,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub summary: ProductSummary,
    pub details: String,
}

impl From<Product> for ProductDetail {
    fn from(mut product: Product) -> Self {
        let details = std::mem::take(&mut product.details);
        Self {
            summary: product.into(),
            details,
        }
    }
}

/// Serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyObject {}

/// Detail lookup result. A miss is still a JSON object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProductLookup {
    Found(ProductDetail),
    Missing(EmptyObject),
}

impl From<Option<Product>> for ProductLookup {
    fn from(product: Option<Product>) -> Self {
        match product {
            Some(product) => ProductLookup::Found(product.into()),
            None => ProductLookup::Missing(EmptyObject::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(price: CellValue) -> SheetRow {
        [
            ("id", CellValue::numericise("7")),
            ("vendor", CellValue::from("Acme")),
            ("name", CellValue::from("Trail Boot")),
            ("category", CellValue::from("shoes")),
            ("gender", CellValue::from("women")),
            ("subCategory", CellValue::from("boots")),
            ("price", price),
            ("imageUrl", CellValue::from("https://img.example/boot.png")),
            ("details", CellValue::from("Waterproof leather")),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }

    #[test]
    fn strips_currency_symbol_from_price() {
        let product = Product::from_row(&row(CellValue::from("$19.99"))).unwrap();

        assert_eq!(product.price, 19.99);
    }

    #[test]
    fn accepts_numeric_price_cells() {
        assert_eq!(Product::from_row(&row(CellValue::from(20_i64))).unwrap().price, 20.0);
        assert_eq!(Product::from_row(&row(CellValue::from(4.5_f64))).unwrap().price, 4.5);
    }

    #[test]
    fn unparsable_price_is_a_malformed_row() {
        let err = Product::from_row(&row(CellValue::from("$free"))).unwrap_err();

        assert!(matches!(err, AppError::MalformedRow(_)));
    }

    #[test]
    fn missing_field_is_named_in_the_error() {
        let mut incomplete = row(CellValue::from("$1"));
        incomplete.remove("subCategory");

        match Product::from_row(&incomplete) {
            Err(AppError::MalformedRow(msg)) => assert!(msg.contains("subCategory")),
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn text_ids_are_kept_as_strings() {
        let mut textual = row(CellValue::from("$1"));
        textual.insert("id".to_string(), CellValue::numericise("SKU-2"));

        let product = Product::from_row(&textual).unwrap();
        assert_eq!(product.id.as_text(), "SKU-2");
        assert_eq!(
            serde_json::to_value(ProductSummary::from(product)).unwrap()["id"],
            json!("SKU-2")
        );
    }

    #[test]
    fn fractional_id_keeps_its_sheet_text() {
        let mut fractional = row(CellValue::from("$1"));
        fractional.insert("id".to_string(), CellValue::numericise("7.0"));

        let product = Product::from_row(&fractional).unwrap();
        assert_eq!(product.id.as_text(), "7.0");
        assert_eq!(
            serde_json::to_value(ProductSummary::from(product)).unwrap()["id"],
            json!(7.0)
        );
    }

    #[test]
    fn numeric_cells_become_their_sheet_text_in_string_fields() {
        let mut numeric = row(CellValue::from("$1"));
        numeric.insert("name".to_string(), CellValue::numericise("1984"));
        numeric.insert("category".to_string(), CellValue::numericise("10.0"));
        numeric.insert("vendor".to_string(), CellValue::numericise("1.10"));

        let product = Product::from_row(&numeric).unwrap();
        assert_eq!(product.name, "1984");
        assert_eq!(product.category, "10.0");
        assert_eq!(product.vendor, "1.10");
    }

    #[test]
    fn summary_omits_details_and_detail_includes_them() {
        let product = Product::from_row(&row(CellValue::from("$19.99"))).unwrap();

        let summary = serde_json::to_value(ProductSummary::from(product.clone())).unwrap();
        assert_eq!(
            summary,
            json!({
                "id": 7,
                "vendor": "Acme",
                "name": "Trail Boot",
                "category": "shoes",
                "gender": "women",
                "subCategory": "boots",
                "price": 19.99,
                "imageUrl": "https://img.example/boot.png"
            })
        );

        let detail = serde_json::to_value(ProductDetail::from(product)).unwrap();
        assert_eq!(detail["details"], "Waterproof leather");
        assert_eq!(detail["subCategory"], "boots");
    }

    #[test]
    fn missing_lookup_serializes_to_empty_object() {
        let body = serde_json::to_value(ProductLookup::from(None)).unwrap();

        assert_eq!(body, json!({}));
    }
}
