use serde::{Deserialize, Serialize};

/// Records addressed by their backend `_id`.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A reference the backend sends either as a bare id or as the populated record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Populated(T),
}

impl<T: Keyed> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Populated(record) => record.key(),
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Populated(record) => Some(record),
        }
    }

    /// Resolve to a record, looking the id up in `known` when not populated.
    pub fn resolve<'a>(&'a self, known: &'a [T]) -> Option<&'a T> {
        match self {
            Ref::Populated(record) => Some(record),
            Ref::Id(id) => known.iter().find(|r| r.key() == id),
        }
    }
}

impl<T> Default for Ref<T> {
    fn default() -> Self {
        Ref::Id(String::new())
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(id: &str) -> Self {
        Ref::Id(id.to_string())
    }
}

/// One page of a list endpoint, normalised across the backend's pagination shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: 0,
            total: 0,
            total_pages: 0,
        }
    }

    /// Slice `all` into the requested page. `page` is 1-based.
    pub fn slice(all: Vec<T>, page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total = all.len() as u64;
        let total_pages = total.div_ceil(limit as u64) as u32;
        let start = ((page - 1) * limit) as usize;
        let items = all
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        Self {
            items,
            page,
            limit,
            total,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query string shared by every list endpoint. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ListQuery {
    /// Page `page` of `limit` records, newest first.
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page.max(1)),
            limit: Some(limit),
            sort_by: Some("createdAt".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = non_blank(department);
        self
    }

    pub fn with_employee_type(mut self, employee_type: &str) -> Self {
        self.employee_type = non_blank(employee_type);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = non_blank(status);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn page_or_first(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit_or(&self, default: u32) -> u32 {
        self.limit.filter(|l| *l > 0).unwrap_or(default)
    }

    /// Lower-cased search term, if any.
    pub fn needle(&self) -> Option<String> {
        self.search.as_deref().and_then(non_blank).map(|s| s.to_lowercase())
    }
}

/// A file picked in the browser, ready for a multipart upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Extension of the original file name, `png` when it has none.
    pub fn extension(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Thing {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    impl Keyed for Thing {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn ref_accepts_id_or_object() {
        let bare: Ref<Thing> = serde_json::from_str(r#""dept-1""#).unwrap();
        assert_eq!(bare.id(), "dept-1");
        assert!(bare.populated().is_none());

        let full: Ref<Thing> = serde_json::from_str(r#"{"_id":"dept-2","name":"HR"}"#).unwrap();
        assert_eq!(full.id(), "dept-2");
        assert_eq!(full.populated().unwrap().name, "HR");
    }

    #[test]
    fn ref_resolves_against_known_records() {
        let known = vec![Thing {
            id: "dept-1".into(),
            name: "Engineering".into(),
        }];
        let bare: Ref<Thing> = Ref::from("dept-1");
        assert_eq!(bare.resolve(&known).unwrap().name, "Engineering");
        let missing: Ref<Thing> = Ref::from("dept-9");
        assert!(missing.resolve(&known).is_none());
    }

    #[test]
    fn slice_computes_page_count() {
        let page = Page::slice((1..=23).collect::<Vec<_>>(), 3, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
        assert!(page.has_prev());

        let past_end = Page::slice(vec![1, 2], 4, 10);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages, 1);

        let none: Page<u8> = Page::slice(Vec::new(), 1, 10);
        assert_eq!(none.total_pages, 0);
    }

    #[test]
    fn query_omits_unset_and_blank_fields() {
        let query = ListQuery::page(2, 10)
            .with_search("  ")
            .with_employee_type("full-time");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 2,
                "limit": 10,
                "sortBy": "createdAt",
                "sortOrder": "desc",
                "employeeType": "full-time"
            })
        );
    }

    #[test]
    fn upload_extension_defaults_to_png() {
        assert_eq!(Upload::new("photo.JPG", "image/jpeg", vec![]).extension(), "JPG");
        assert_eq!(Upload::new("photo", "image/png", vec![]).extension(), "png");
        assert_eq!(Upload::new(".hidden", "image/png", vec![]).extension(), "png");
    }
}
