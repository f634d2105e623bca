//! # ApiClient: the REST implementation of [`Backend`]
//!
//! Every response from the dashboard backend is wrapped in an envelope:
//!
//! ```json
//! { "success": true, "message": "…", "data": … }
//! ```
//!
//! [`decode_envelope`] turns a status code and body into either the `data`
//! payload or an [`ApiError`]: HTTP 401 is always [`ApiError::Unauthorized`],
//! other non-2xx statuses and `success: false` are [`ApiError::Rejected`]
//! carrying the backend's message.
//!
//! The backend is not consistent about where it puts records inside `data`.
//! Lists come as `{ "<plural>": [...], "pagination": {...} }` with two
//! different pagination shapes; single records are sometimes wrapped in a
//! named key and sometimes not. [`page_from`], [`items_from`] and
//! [`record_from`] absorb those differences so callers always get a
//! [`Page`], a `Vec` or a bare record.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{ApiResult, Backend};
use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::models::*;

/// HTTP client for the dashboard REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Same client, authenticating with `token`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Value> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("request failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let result = decode_envelope::<Value>(status, &body);
        if let Err(err) = &result {
            tracing::warn!(status, "backend error: {err}");
        }
        result
    }

    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_query(&self, path: &str, query: &ListQuery) -> ApiResult<Value> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    async fn json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<Value> {
        self.send(self.request(method, path).json(body)).await
    }

    async fn multipart(&self, method: Method, path: &str, form: Form) -> ApiResult<Value> {
        self.send(self.request(method, path).multipart(form)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)).await.map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Envelope and payload decoding
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

/// Decode a response body into the envelope's `data` payload.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let envelope: Option<Envelope> = serde_json::from_str(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.message.clone())
        .unwrap_or_default();

    if status == 401 {
        return Err(ApiError::Unauthorized(if message.is_empty() {
            "Session expired. Please sign in again.".to_string()
        } else {
            message
        }));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::rejected(status, message));
    }

    let envelope = envelope.ok_or_else(|| ApiError::Decode("response is not JSON".into()))?;
    if envelope.success == Some(false) {
        return Err(ApiError::rejected(status, envelope.message));
    }
    Ok(serde_json::from_value(envelope.data)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pagination {
    #[serde(alias = "currentPage", default)]
    page: Option<u32>,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(alias = "totalContacts", default)]
    total: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

/// Build a [`Page`] from `{ "<key>": [...], "pagination": {...} }`.
///
/// Missing pagination fields fall back to the query and the item count.
pub fn page_from<T: DeserializeOwned>(
    mut data: Value,
    key: &str,
    query: &ListQuery,
) -> ApiResult<Page<T>> {
    let items: Vec<T> = match data.get_mut(key).map(Value::take) {
        Some(Value::Null) | None => Vec::new(),
        Some(list) => serde_json::from_value(list)?,
    };
    let pagination: Option<Pagination> = data
        .get_mut("pagination")
        .map(Value::take)
        .map(serde_json::from_value)
        .transpose()?;

    let page = pagination
        .as_ref()
        .and_then(|p| p.page)
        .unwrap_or_else(|| query.page_or_first());
    let limit = pagination
        .as_ref()
        .and_then(|p| p.limit)
        .unwrap_or_else(|| query.limit_or(items.len().max(1) as u32));
    let total = pagination
        .as_ref()
        .and_then(|p| p.total)
        .unwrap_or(items.len() as u64);
    let total_pages = pagination
        .as_ref()
        .and_then(|p| p.total_pages)
        .unwrap_or_else(|| total.div_ceil(limit.max(1) as u64) as u32);

    Ok(Page {
        items,
        page,
        limit,
        total,
        total_pages,
    })
}

/// A list that arrives either bare or under `key`.
pub fn items_from<T: DeserializeOwned>(mut data: Value, key: &str) -> ApiResult<Vec<T>> {
    let list = match data {
        Value::Array(_) => data,
        Value::Null => return Ok(Vec::new()),
        _ => data.get_mut(key).map(Value::take).unwrap_or(Value::Null),
    };
    if list.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(list)?)
}

/// A record that arrives either bare or under `key`.
pub fn record_from<T: DeserializeOwned>(mut data: Value, key: &str) -> ApiResult<T> {
    if data.get(key).is_some_and(Value::is_object) {
        data = data[key].take();
    }
    Ok(serde_json::from_value(data)?)
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

fn file_part(upload: Upload) -> ApiResult<Part> {
    let content_type = if upload.content_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        upload.content_type
    };
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&content_type)
        .map_err(ApiError::from)
}

fn text_form(fields: Vec<(String, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (key, value)| form.text(key, value))
}

fn product_form(draft: &ProductDraft, main_image: Upload) -> ApiResult<Form> {
    let form = Form::new().part("mainImage", file_part(main_image)?);
    Ok(draft
        .form_fields()
        .into_iter()
        .fold(form, |form, (key, value)| form.text(key, value)))
}

fn id_card_form(draft: &IdCardDraft, picture: Option<Upload>) -> ApiResult<Form> {
    let mut form = Form::new();
    if let Some(picture) = picture {
        form = form.part("employeePicture", file_part(picture)?);
    }
    Ok(draft
        .form_fields()
        .into_iter()
        .fold(form, |form, (key, value)| form.text(key, value)))
}

#[derive(Serialize)]
struct StatusBody {
    status: ContactStatus,
}

#[derive(Serialize)]
struct LimitQuery {
    limit: u32,
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthPayload> {
        let data = self.json(Method::POST, "/admin/login", credentials).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthPayload> {
        let data = self.json(Method::POST, "/admin/signup", request).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn profile(&self) -> ApiResult<Admin> {
        record_from(self.get("/admin/profile").await?, "admin")
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Admin> {
        let data = self.json(Method::PUT, "/admin/profile", update).await?;
        record_from(data, "admin")
    }

    async fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        self.json(Method::PUT, "/admin/change-password", change)
            .await
            .map(|_| ())
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.request(Method::POST, "/admin/logout"))
            .await
            .map(|_| ())
    }

    async fn list_departments(&self, query: &ListQuery) -> ApiResult<Page<Department>> {
        page_from(self.get_query("/departments", query).await?, "departments", query)
    }

    async fn get_department(&self, id: &str) -> ApiResult<Department> {
        record_from(self.get(&format!("/departments/{id}")).await?, "department")
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> ApiResult<Department> {
        let data = self.json(Method::POST, "/departments", draft).await?;
        record_from(data, "department")
    }

    async fn update_department(&self, id: &str, draft: &DepartmentDraft) -> ApiResult<Department> {
        let data = self
            .json(Method::PUT, &format!("/departments/{id}"), draft)
            .await?;
        record_from(data, "department")
    }

    async fn delete_department(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/departments/{id}")).await
    }

    async fn active_departments(&self) -> ApiResult<Vec<Department>> {
        items_from(self.get("/departments/list/active").await?, "departments")
    }

    async fn list_designations(&self, query: &ListQuery) -> ApiResult<Page<Designation>> {
        page_from(
            self.get_query("/designations", query).await?,
            "designations",
            query,
        )
    }

    async fn get_designation(&self, id: &str) -> ApiResult<Designation> {
        record_from(self.get(&format!("/designations/{id}")).await?, "designation")
    }

    async fn create_designation(&self, draft: &DesignationDraft) -> ApiResult<Designation> {
        let data = self.json(Method::POST, "/designations", draft).await?;
        record_from(data, "designation")
    }

    async fn update_designation(
        &self,
        id: &str,
        draft: &DesignationDraft,
    ) -> ApiResult<Designation> {
        let data = self
            .json(Method::PUT, &format!("/designations/{id}"), draft)
            .await?;
        record_from(data, "designation")
    }

    async fn delete_designation(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/designations/{id}")).await
    }

    async fn designations_by_department(&self, department_id: &str) -> ApiResult<Vec<Designation>> {
        items_from(
            self.get(&format!("/designations/department/{department_id}"))
                .await?,
            "designations",
        )
    }

    async fn active_designations(&self) -> ApiResult<Vec<Designation>> {
        items_from(self.get("/designations/list/active").await?, "designations")
    }

    async fn list_products(&self, query: &ListQuery) -> ApiResult<Page<Product>> {
        page_from(self.get_query("/products", query).await?, "products", query)
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        record_from(self.get(&format!("/products/{id}")).await?, "product")
    }

    async fn create_product(&self, draft: &ProductDraft, main_image: Upload) -> ApiResult<Product> {
        let form = product_form(draft, main_image)?;
        record_from(self.multipart(Method::POST, "/products", form).await?, "product")
    }

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product> {
        let data = self
            .json(Method::PUT, &format!("/products/{id}"), draft)
            .await?;
        record_from(data, "product")
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/products/{id}")).await
    }

    async fn product_categories(&self) -> ApiResult<Vec<ProductCategory>> {
        items_from(self.get("/products/categories/list").await?, "categories")
    }

    async fn upload_product_images(&self, id: &str, images: Vec<Upload>) -> ApiResult<Product> {
        let mut form = Form::new();
        for image in images {
            form = form.part("additionalImages", file_part(image)?);
        }
        let data = self
            .multipart(Method::POST, &format!("/products/{id}/images"), form)
            .await?;
        record_from(data, "product")
    }

    async fn update_product_main_image(&self, id: &str, image: Upload) -> ApiResult<Product> {
        let form = Form::new().part("mainImage", file_part(image)?);
        let data = self
            .multipart(Method::PUT, &format!("/products/{id}/main-image"), form)
            .await?;
        record_from(data, "product")
    }

    async fn list_id_cards(&self, query: &ListQuery) -> ApiResult<Page<IdCard>> {
        page_from(self.get_query("/id-cards", query).await?, "idCards", query)
    }

    async fn get_id_card(&self, id: &str) -> ApiResult<IdCard> {
        record_from(self.get(&format!("/id-cards/{id}")).await?, "idCard")
    }

    async fn get_id_card_by_number(&self, number: &str) -> ApiResult<IdCard> {
        record_from(self.get(&format!("/id-cards/number/{number}")).await?, "idCard")
    }

    async fn create_id_card(&self, draft: &IdCardDraft, picture: Upload) -> ApiResult<IdCard> {
        let form = id_card_form(draft, Some(picture))?;
        record_from(self.multipart(Method::POST, "/id-cards", form).await?, "idCard")
    }

    async fn update_id_card(
        &self,
        id: &str,
        draft: &IdCardDraft,
        picture: Option<Upload>,
    ) -> ApiResult<IdCard> {
        let form = id_card_form(draft, picture)?;
        let data = self
            .multipart(Method::PUT, &format!("/id-cards/{id}"), form)
            .await?;
        record_from(data, "idCard")
    }

    async fn update_id_card_picture(&self, id: &str, picture: Upload) -> ApiResult<IdCard> {
        let form = Form::new().part("employeePicture", file_part(picture)?);
        let data = self
            .multipart(Method::PUT, &format!("/id-cards/{id}/picture"), form)
            .await?;
        record_from(data, "idCard")
    }

    async fn delete_id_card(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/id-cards/{id}")).await
    }

    async fn id_card_stats(&self) -> ApiResult<IdCardStats> {
        Ok(serde_json::from_value(self.get("/id-cards/stats/overview").await?)?)
    }

    async fn list_contacts(&self, query: &ListQuery) -> ApiResult<Page<Contact>> {
        page_from(self.get_query("/contact", query).await?, "contacts", query)
    }

    async fn get_contact(&self, id: &str) -> ApiResult<Contact> {
        record_from(self.get(&format!("/contact/{id}")).await?, "contact")
    }

    async fn update_contact_status(&self, id: &str, status: ContactStatus) -> ApiResult<Contact> {
        let data = self
            .json(
                Method::PUT,
                &format!("/contact/{id}/status"),
                &StatusBody { status },
            )
            .await?;
        record_from(data, "contact")
    }

    async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/contact/{id}")).await
    }

    async fn contact_stats(&self) -> ApiResult<ContactStats> {
        Ok(serde_json::from_value(self.get("/contact/stats/overview").await?)?)
    }

    async fn dashboard_overview(&self) -> ApiResult<DashboardOverview> {
        record_from(self.get("/dashboard/overview").await?, "overview")
    }

    async fn dashboard_charts(&self) -> ApiResult<ChartData> {
        Ok(serde_json::from_value(self.get("/dashboard/charts").await?)?)
    }

    async fn recent_activity(&self, limit: u32) -> ApiResult<RecentActivity> {
        let builder = self
            .request(Method::GET, "/dashboard/recent-activity")
            .query(&LimitQuery { limit });
        Ok(serde_json::from_value(self.send(builder).await?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_successful_envelope() {
        let body = r#"{"success":true,"message":"ok","data":{"overview":{"totalProducts":3}}}"#;
        let data: Value = decode_envelope(200, body).unwrap();
        let overview: DashboardOverview = record_from(data, "overview").unwrap();
        assert_eq!(overview.total_products, 3);
    }

    #[test]
    fn success_false_is_rejected_with_backend_message() {
        let body = r#"{"success":false,"message":"Department code already exists","data":null}"#;
        let err = decode_envelope::<Value>(200, body).unwrap_err();
        assert_eq!(err, ApiError::rejected(200, "Department code already exists"));
    }

    #[test]
    fn status_401_is_unauthorized() {
        let err = decode_envelope::<Value>(401, r#"{"success":false,"message":"Token expired"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Unauthorized("Token expired".into()));

        let err = decode_envelope::<Value>(401, "").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn error_status_without_json_body_is_rejected() {
        let err = decode_envelope::<Value>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::rejected(502, ""));
        assert_eq!(err.user_message("Server error"), "Server error");
    }

    #[test]
    fn unit_payload_accepts_missing_data() {
        decode_envelope::<()>(200, r#"{"success":true,"message":"Deleted"}"#).unwrap();
    }

    #[test]
    fn page_from_standard_pagination() {
        let data = json!({
            "departments": [{"_id": "dept-1", "name": "Engineering", "code": "ENG"}],
            "pagination": {"page": 2, "limit": 10, "total": 11, "totalPages": 2}
        });
        let page: Page<Department> = page_from(data, "departments", &ListQuery::page(2, 10)).unwrap();
        assert_eq!(page.items[0].code, "ENG");
        assert_eq!((page.page, page.limit, page.total, page.total_pages), (2, 10, 11, 2));
        assert!(!page.has_next());
    }

    #[test]
    fn page_from_contact_pagination() {
        let data = json!({
            "contacts": [],
            "pagination": {"currentPage": 1, "totalPages": 3, "totalContacts": 30,
                           "hasNextPage": true, "hasPrevPage": false}
        });
        let page: Page<Contact> = page_from(data, "contacts", &ListQuery::page(1, 12)).unwrap();
        assert_eq!(page.limit, 12);
        assert_eq!(page.total, 30);
        assert!(page.has_next());
    }

    #[test]
    fn page_from_without_pagination_uses_query() {
        let data = json!({"idCards": [
            {"_id": "a", "idCardNumber": "EMP001", "fullName": "A"},
            {"_id": "b", "idCardNumber": "EMP002", "fullName": "B"}
        ]});
        let page: Page<IdCard> = page_from(data, "idCards", &ListQuery::page(1, 10)).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn items_and_records_accept_both_shapes() {
        let wrapped: Vec<Department> =
            items_from(json!({"departments": [{"_id": "d", "name": "HR"}]}), "departments")
                .unwrap();
        let bare: Vec<ProductCategory> =
            items_from(json!([{"_id": "c", "name": "Kitchen"}]), "categories").unwrap();
        assert_eq!(wrapped[0].name, "HR");
        assert_eq!(bare[0].name, "Kitchen");

        let product: Product =
            record_from(json!({"_id": "p1", "productName": "Fan"}), "product").unwrap();
        let card: IdCard = record_from(
            json!({"idCard": {"_id": "i1", "idCardNumber": "EMP009", "fullName": "Z"}}),
            "idCard",
        )
        .unwrap();
        assert_eq!(product.product_name, "Fan");
        assert_eq!(card.id_card_number, "EMP009");
    }

    #[test]
    fn token_is_dropped_when_empty() {
        let client = ApiClient::new("http://localhost:3100/api/").with_token(Some(String::new()));
        assert!(client.token().is_none());
        assert_eq!(client.url("/departments"), "http://localhost:3100/api/departments");
    }
}
