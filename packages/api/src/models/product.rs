use serde::{Deserialize, Serialize};

use super::common::Keyed;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Product form contents. Create sends it as multipart with the main image,
/// update as a JSON body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    pub product_features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            product_features: product.product_features.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
        }
    }
}

impl ProductDraft {
    /// Drop blank features and blank optional text; a zero price counts as unset.
    pub fn normalized(mut self) -> Self {
        self.product_name = self.product_name.trim().to_string();
        self.product_features = self
            .product_features
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self.category = self.category.filter(|c| !c.trim().is_empty());
        self.price = self.price.filter(|p| *p != 0.0);
        self
    }

    /// Multipart text fields for `POST /products`. The `mainImage` part is
    /// added by the caller.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("productName".to_string(), self.product_name.clone())];
        for (i, feature) in self.product_features.iter().enumerate() {
            fields.push((format!("productFeatures[{i}]"), feature.clone()));
        }
        if let Some(description) = self.description.as_ref().filter(|d| !d.is_empty()) {
            fields.push(("description".to_string(), description.clone()));
        }
        if let Some(price) = self.price.filter(|p| *p != 0.0) {
            fields.push(("price".to_string(), price.to_string()));
        }
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            fields.push(("category".to_string(), category.clone()));
        }
        fields
    }

    pub fn apply_to(&self, product: &mut Product) {
        product.product_name = self.product_name.clone();
        product.product_features = self.product_features.clone();
        product.description = self.description.clone();
        product.price = self.price;
        product.category = self.category.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_index_features_and_skip_zero_price() {
        let draft = ProductDraft {
            product_name: "Water Purifier".into(),
            product_features: vec!["RO".into(), "UV".into()],
            description: Some(String::new()),
            price: Some(0.0),
            category: Some("Appliances".into()),
        };
        let fields = draft.form_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["productName", "productFeatures[0]", "productFeatures[1]", "category"]
        );
    }

    #[test]
    fn price_is_sent_as_plain_number() {
        let draft = ProductDraft {
            product_name: "Kettle".into(),
            product_features: vec!["1.5 L".into()],
            price: Some(1499.5),
            ..ProductDraft::default()
        };
        assert!(draft
            .form_fields()
            .contains(&("price".to_string(), "1499.5".to_string())));
    }

    #[test]
    fn normalized_strips_blank_entries() {
        let draft = ProductDraft {
            product_name: " Fan ".into(),
            product_features: vec!["".into(), " Silent ".into(), "  ".into()],
            description: Some("  ".into()),
            price: Some(0.0),
            category: None,
        }
        .normalized();
        assert_eq!(draft.product_name, "Fan");
        assert_eq!(draft.product_features, vec!["Silent".to_string()]);
        assert!(draft.description.is_none());
        assert!(draft.price.is_none());
    }

    #[test]
    fn json_update_body_omits_unset_fields() {
        let draft = ProductDraft {
            product_name: "Fan".into(),
            product_features: vec!["Silent".into()],
            ..ProductDraft::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"productName": "Fan", "productFeatures": ["Silent"]})
        );
    }
}
