//! # Demo backend: the whole API answered from memory
//!
//! [`DemoBackend`] implements [`Backend`] over seeded fixtures so every page
//! of the dashboard works without a server. Clones share one state behind
//! `Arc<Mutex<..>>`, so an edit made on one page is visible on the next for as
//! long as the demo session lives.
//!
//! ## Behaviour
//!
//! | Area | What the fixture store does |
//! |------|-----------------------------|
//! | Auth | Only `admin@mychoice.com` / `demo123` logs in, always as the fixture admin; signup replaces the signed-in admin; password changes always succeed |
//! | Lists | Case-insensitive search plus module filters, newest first, then [`Page::slice`] |
//! | Creates | Fresh `uuid` ids; ID cards take the next free `EMP###` number |
//! | References | Designations and ID cards come back with department/designation populated when the target exists |
//! | Aggregates | Dashboard overview, charts, recent activity and stats are computed from the current records |

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use api::media::{employee_picture_filename, employee_picture_path};
use api::*;
use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};

use crate::fixtures;

/// Records considered "recent" on the dashboard.
const RECENT_DAYS: i64 = 30;

#[derive(Debug)]
struct DemoState {
    admin: Admin,
    departments: Vec<Department>,
    designations: Vec<Designation>,
    id_cards: Vec<IdCard>,
    products: Vec<Product>,
    categories: Vec<ProductCategory>,
    contacts: Vec<Contact>,
}

impl DemoState {
    fn seeded() -> Self {
        let now = timestamp();
        Self {
            admin: fixtures::admin(&now),
            departments: fixtures::departments(&now),
            designations: fixtures::designations(&now),
            id_cards: fixtures::id_cards(),
            products: fixtures::products(),
            categories: fixtures::categories(),
            contacts: fixtures::contacts(),
        }
    }

    fn populate_designation(&self, mut designation: Designation) -> Designation {
        if let Some(dept) = designation.department.resolve(&self.departments) {
            designation.department = Ref::Populated(dept.clone());
        }
        designation
    }

    fn populate_card(&self, mut card: IdCard) -> IdCard {
        if let Some(dept) = card.department.resolve(&self.departments) {
            card.department = Ref::Populated(dept.clone());
        }
        if let Some(desig) = card.designation.resolve(&self.designations) {
            card.designation = Ref::Populated(desig.clone());
        }
        card
    }

    fn next_card_number(&self) -> String {
        let highest = self
            .id_cards
            .iter()
            .filter_map(|c| c.id_card_number.strip_prefix("EMP"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("EMP{:03}", highest + 1)
    }

    fn creator(&self) -> Option<NamedRef> {
        Some(NamedRef {
            id: self.admin.id.clone(),
            full_name: self.admin.full_name.clone(),
            ..NamedRef::default()
        })
    }
}

/// In-memory [`Backend`] used while demo mode is on.
#[derive(Clone, Debug)]
pub struct DemoBackend {
    state: Arc<Mutex<DemoState>>,
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DemoBackend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl DemoBackend {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DemoState::seeded())),
        }
    }

    /// Throw away every change and go back to the fixtures.
    pub fn reset(&self) {
        *self.lock() = DemoState::seeded();
    }

    fn lock(&self) -> MutexGuard<'_, DemoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn fresh_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

fn parse_time(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn is_recent(created_at: &str, now: DateTime<Utc>) -> bool {
    parse_time(created_at).is_some_and(|t| now - t <= Duration::days(RECENT_DAYS))
}

/// Does any field contain the lower-cased needle.
fn contains_needle(needle: Option<&str>, fields: &[&str]) -> bool {
    match needle {
        None => true,
        Some(needle) => fields.iter().any(|f| f.to_lowercase().contains(needle)),
    }
}

fn count_recent<'a>(dates: impl Iterator<Item = &'a str>, now: DateTime<Utc>) -> u64 {
    dates.filter(|d| is_recent(d, now)).count() as u64
}

fn newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| created_at(b).cmp(created_at(a)));
}

fn paginate<T>(items: Vec<T>, query: &ListQuery, default_limit: u32) -> Page<T> {
    Page::slice(items, query.page_or_first(), query.limit_or(default_limit))
}

fn find_mut<'a, T: Keyed>(items: &'a mut [T], id: &str, what: &str) -> ApiResult<&'a mut T> {
    items
        .iter_mut()
        .find(|item| item.key() == id)
        .ok_or_else(|| ApiError::NotFound(what.to_string()))
}

fn remove<T: Keyed>(items: &mut Vec<T>, id: &str, what: &str) -> ApiResult<()> {
    let before = items.len();
    items.retain(|item| item.key() != id);
    if items.len() == before {
        Err(ApiError::NotFound(what.to_string()))
    } else {
        Ok(())
    }
}

fn by_month<'a>(dates: impl Iterator<Item = &'a str>) -> Vec<ChartPoint> {
    let mut counts: BTreeMap<MonthKey, u64> = BTreeMap::new();
    for date in dates {
        if let Some(t) = parse_time(date) {
            let key = MonthKey {
                year: t.year(),
                month: t.month(),
            };
            *counts.entry(key).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(key, count)| ChartPoint { key, count })
        .collect()
}

fn distribution<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Distribution> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut buckets: Vec<Distribution> = counts
        .into_iter()
        .map(|(key, count)| Distribution {
            key: key.to_string(),
            count,
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

impl Backend for DemoBackend {
    // ---- auth ----

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthPayload> {
        let mut state = self.lock();
        if credentials.email.trim() == fixtures::DEMO_EMAIL
            && credentials.password == fixtures::DEMO_PASSWORD
        {
            // The demo credentials always sign in as the fixture admin,
            // whoever signed up since.
            if state.admin.email != fixtures::DEMO_EMAIL {
                state.admin = fixtures::admin(&timestamp());
            }
            Ok(AuthPayload {
                admin: state.admin.clone(),
                token: String::new(),
            })
        } else {
            Err(ApiError::rejected(
                401,
                format!(
                    "Invalid credentials. Use {} / {}",
                    fixtures::DEMO_EMAIL,
                    fixtures::DEMO_PASSWORD
                ),
            ))
        }
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthPayload> {
        let mut state = self.lock();
        state.admin = Admin {
            id: format!("demo-{}", Utc::now().timestamp_millis()),
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
            is_active: true,
            created_at: timestamp(),
            updated_at: None,
        };
        Ok(AuthPayload {
            admin: state.admin.clone(),
            token: String::new(),
        })
    }

    async fn profile(&self) -> ApiResult<Admin> {
        Ok(self.lock().admin.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Admin> {
        let mut state = self.lock();
        let mut admin = state.admin.merged(update);
        admin.updated_at = Some(timestamp());
        state.admin = admin.clone();
        Ok(admin)
    }

    async fn change_password(&self, _change: &PasswordChange) -> ApiResult<()> {
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        Ok(())
    }

    // ---- departments ----

    async fn list_departments(&self, query: &ListQuery) -> ApiResult<Page<Department>> {
        let state = self.lock();
        let needle = query.needle();
        let mut found: Vec<Department> = state
            .departments
            .iter()
            .filter(|d| contains_needle(needle.as_deref(), &[&d.name, &d.code, &d.description]))
            .cloned()
            .collect();
        newest_first(&mut found, |d| d.created_at.as_str());
        Ok(paginate(found, query, 10))
    }

    async fn get_department(&self, id: &str) -> ApiResult<Department> {
        let mut state = self.lock();
        find_mut(&mut state.departments, id, "Department").map(|d| d.clone())
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> ApiResult<Department> {
        let mut state = self.lock();
        let code = draft.code.trim().to_uppercase();
        if state.departments.iter().any(|d| d.code.eq_ignore_ascii_case(&code)) {
            return Err(ApiError::rejected(400, "Department code already exists"));
        }
        let department = Department {
            id: fresh_id("dept"),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            code,
            is_active: true,
            created_at: timestamp(),
            updated_at: None,
        };
        state.departments.push(department.clone());
        Ok(department)
    }

    async fn update_department(&self, id: &str, draft: &DepartmentDraft) -> ApiResult<Department> {
        let mut state = self.lock();
        let dept = find_mut(&mut state.departments, id, "Department")?;
        dept.name = draft.name.trim().to_string();
        dept.description = draft.description.trim().to_string();
        dept.code = draft.code.trim().to_uppercase();
        dept.updated_at = Some(timestamp());
        Ok(dept.clone())
    }

    async fn delete_department(&self, id: &str) -> ApiResult<()> {
        remove(&mut self.lock().departments, id, "Department")
    }

    async fn active_departments(&self) -> ApiResult<Vec<Department>> {
        let state = self.lock();
        Ok(state
            .departments
            .iter()
            .filter(|d| d.is_active)
            .cloned()
            .collect())
    }

    // ---- designations ----

    async fn list_designations(&self, query: &ListQuery) -> ApiResult<Page<Designation>> {
        let state = self.lock();
        let needle = query.needle();
        let mut found: Vec<Designation> = state
            .designations
            .iter()
            .filter(|d| contains_needle(needle.as_deref(), &[&d.title, &d.description]))
            .filter(|d| {
                query
                    .department
                    .as_deref()
                    .is_none_or(|dept| d.department.id() == dept)
            })
            .map(|d| state.populate_designation(d.clone()))
            .collect();
        newest_first(&mut found, |d| d.created_at.as_str());
        Ok(paginate(found, query, 10))
    }

    async fn get_designation(&self, id: &str) -> ApiResult<Designation> {
        let state = self.lock();
        state
            .designations
            .iter()
            .find(|d| d.id == id)
            .map(|d| state.populate_designation(d.clone()))
            .ok_or_else(|| ApiError::NotFound("Designation".to_string()))
    }

    async fn create_designation(&self, draft: &DesignationDraft) -> ApiResult<Designation> {
        let mut state = self.lock();
        let designation = Designation {
            id: fresh_id("desig"),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            level: draft.level,
            department: Ref::from(draft.department.as_str()),
            is_active: true,
            created_at: timestamp(),
            updated_at: None,
        };
        state.designations.push(designation.clone());
        Ok(state.populate_designation(designation))
    }

    async fn update_designation(
        &self,
        id: &str,
        draft: &DesignationDraft,
    ) -> ApiResult<Designation> {
        let mut state = self.lock();
        let desig = find_mut(&mut state.designations, id, "Designation")?;
        desig.title = draft.title.trim().to_string();
        desig.description = draft.description.trim().to_string();
        desig.level = draft.level;
        desig.department = Ref::from(draft.department.as_str());
        desig.updated_at = Some(timestamp());
        let updated = desig.clone();
        Ok(state.populate_designation(updated))
    }

    async fn delete_designation(&self, id: &str) -> ApiResult<()> {
        remove(&mut self.lock().designations, id, "Designation")
    }

    async fn designations_by_department(&self, department_id: &str) -> ApiResult<Vec<Designation>> {
        let state = self.lock();
        Ok(state
            .designations
            .iter()
            .filter(|d| d.department.id() == department_id)
            .map(|d| state.populate_designation(d.clone()))
            .collect())
    }

    async fn active_designations(&self) -> ApiResult<Vec<Designation>> {
        let state = self.lock();
        Ok(state
            .designations
            .iter()
            .filter(|d| d.is_active)
            .map(|d| state.populate_designation(d.clone()))
            .collect())
    }

    // ---- products ----

    async fn list_products(&self, query: &ListQuery) -> ApiResult<Page<Product>> {
        let state = self.lock();
        let needle = query.needle();
        let mut found: Vec<Product> = state
            .products
            .iter()
            .filter(|p| {
                contains_needle(
                    needle.as_deref(),
                    &[
                        &p.product_name,
                        p.description.as_deref().unwrap_or_default(),
                        p.category.as_deref().unwrap_or_default(),
                    ],
                )
            })
            .filter(|p| {
                query
                    .category
                    .as_deref()
                    .is_none_or(|c| p.category.as_deref() == Some(c))
            })
            .cloned()
            .collect();
        newest_first(&mut found, |p| p.created_at.as_str());
        Ok(paginate(found, query, 10))
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        let mut state = self.lock();
        find_mut(&mut state.products, id, "Product").map(|p| p.clone())
    }

    async fn create_product(&self, draft: &ProductDraft, main_image: Upload) -> ApiResult<Product> {
        let mut state = self.lock();
        let now = timestamp();
        let id = fresh_id("prod");
        let mut product = Product {
            main_image: format!("/uploads/products/{id}.{}", main_image.extension()),
            id,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
            ..Product::default()
        };
        draft.clone().normalized().apply_to(&mut product);
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product> {
        let mut state = self.lock();
        let product = find_mut(&mut state.products, id, "Product")?;
        draft.clone().normalized().apply_to(product);
        product.updated_at = timestamp();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        remove(&mut self.lock().products, id, "Product")
    }

    async fn product_categories(&self) -> ApiResult<Vec<ProductCategory>> {
        Ok(self.lock().categories.clone())
    }

    async fn upload_product_images(&self, id: &str, images: Vec<Upload>) -> ApiResult<Product> {
        let mut state = self.lock();
        let product = find_mut(&mut state.products, id, "Product")?;
        let start = product.additional_images.len();
        for (i, image) in images.iter().enumerate() {
            product.additional_images.push(format!(
                "/uploads/products/{id}-{}.{}",
                start + i + 1,
                image.extension()
            ));
        }
        product.updated_at = timestamp();
        Ok(product.clone())
    }

    async fn update_product_main_image(&self, id: &str, image: Upload) -> ApiResult<Product> {
        let mut state = self.lock();
        let product = find_mut(&mut state.products, id, "Product")?;
        product.main_image = format!(
            "/uploads/products/{id}-main-{}.{}",
            Utc::now().timestamp_millis(),
            image.extension()
        );
        product.updated_at = timestamp();
        Ok(product.clone())
    }

    // ---- id cards ----

    async fn list_id_cards(&self, query: &ListQuery) -> ApiResult<Page<IdCard>> {
        let state = self.lock();
        let needle = query.needle();
        let mut found: Vec<IdCard> = state
            .id_cards
            .iter()
            .filter(|c| {
                contains_needle(
                    needle.as_deref(),
                    &[&c.full_name, &c.email, &c.id_card_number],
                )
            })
            .filter(|c| {
                query
                    .department
                    .as_deref()
                    .is_none_or(|dept| c.department.id() == dept)
            })
            .filter(|c| {
                query
                    .employee_type
                    .as_deref()
                    .is_none_or(|t| c.employee_type.as_str() == t)
            })
            .map(|c| state.populate_card(c.clone()))
            .collect();
        newest_first(&mut found, |c| c.created_at.as_str());
        Ok(paginate(found, query, 10))
    }

    async fn get_id_card(&self, id: &str) -> ApiResult<IdCard> {
        let state = self.lock();
        state
            .id_cards
            .iter()
            .find(|c| c.id == id)
            .map(|c| state.populate_card(c.clone()))
            .ok_or_else(|| ApiError::NotFound("ID card".to_string()))
    }

    async fn get_id_card_by_number(&self, number: &str) -> ApiResult<IdCard> {
        let state = self.lock();
        state
            .id_cards
            .iter()
            .find(|c| c.id_card_number.eq_ignore_ascii_case(number))
            .map(|c| state.populate_card(c.clone()))
            .ok_or_else(|| ApiError::NotFound("ID card".to_string()))
    }

    async fn create_id_card(&self, draft: &IdCardDraft, picture: Upload) -> ApiResult<IdCard> {
        let mut state = self.lock();
        let filename = employee_picture_filename(&picture.file_name, Utc::now().timestamp_millis());
        let card = IdCard {
            id: fresh_id("idcard"),
            id_card_number: state.next_card_number(),
            employee_picture: employee_picture_path(&filename),
            employee_type: draft.employee_type,
            full_name: draft.full_name.trim().to_string(),
            address: draft.address.clone(),
            blood_group: draft.blood_group,
            mobile_number: draft.mobile_number.trim().to_string(),
            email: draft.email.trim().to_string(),
            date_of_birth: draft.date_of_birth.clone(),
            date_of_joining: draft.date_of_joining.clone(),
            department: Ref::from(draft.department.as_str()),
            designation: Ref::from(draft.designation.as_str()),
            is_active: true,
            created_at: timestamp(),
            updated_at: None,
        };
        state.id_cards.push(card.clone());
        Ok(state.populate_card(card))
    }

    async fn update_id_card(
        &self,
        id: &str,
        draft: &IdCardDraft,
        picture: Option<Upload>,
    ) -> ApiResult<IdCard> {
        let mut state = self.lock();
        let card = find_mut(&mut state.id_cards, id, "ID card")?;
        card.employee_type = draft.employee_type;
        card.full_name = draft.full_name.trim().to_string();
        card.address = draft.address.clone();
        card.blood_group = draft.blood_group;
        card.mobile_number = draft.mobile_number.trim().to_string();
        card.email = draft.email.trim().to_string();
        card.date_of_birth = draft.date_of_birth.clone();
        card.date_of_joining = draft.date_of_joining.clone();
        card.department = Ref::from(draft.department.as_str());
        card.designation = Ref::from(draft.designation.as_str());
        if let Some(picture) = picture {
            let filename =
                employee_picture_filename(&picture.file_name, Utc::now().timestamp_millis());
            card.employee_picture = employee_picture_path(&filename);
        }
        card.updated_at = Some(timestamp());
        let updated = card.clone();
        Ok(state.populate_card(updated))
    }

    async fn update_id_card_picture(&self, id: &str, picture: Upload) -> ApiResult<IdCard> {
        let mut state = self.lock();
        let card = find_mut(&mut state.id_cards, id, "ID card")?;
        let filename = employee_picture_filename(&picture.file_name, Utc::now().timestamp_millis());
        card.employee_picture = employee_picture_path(&filename);
        card.updated_at = Some(timestamp());
        let updated = card.clone();
        Ok(state.populate_card(updated))
    }

    async fn delete_id_card(&self, id: &str) -> ApiResult<()> {
        remove(&mut self.lock().id_cards, id, "ID card")
    }

    async fn id_card_stats(&self) -> ApiResult<IdCardStats> {
        let state = self.lock();
        let mut stats = IdCardStats::default();
        for card in &state.id_cards {
            stats.total_id_cards += 1;
            if card.is_active {
                stats.active_id_cards += 1;
            } else {
                stats.inactive_id_cards += 1;
            }
            stats.employee_type_distribution.bump(card.employee_type);
            *stats
                .department_distribution
                .entry(card.department.id().to_string())
                .or_default() += 1;
        }
        let mut recent: Vec<IdCard> = state
            .id_cards
            .iter()
            .map(|c| state.populate_card(c.clone()))
            .collect();
        newest_first(&mut recent, |c| c.created_at.as_str());
        recent.truncate(5);
        stats.recent_id_cards = recent;
        Ok(stats)
    }

    // ---- contacts ----

    async fn list_contacts(&self, query: &ListQuery) -> ApiResult<Page<Contact>> {
        let state = self.lock();
        let needle = query.needle();
        let mut found: Vec<Contact> = state
            .contacts
            .iter()
            .filter(|c| {
                contains_needle(
                    needle.as_deref(),
                    &[&c.full_name, &c.email_address, &c.subject, &c.message],
                )
            })
            .filter(|c| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|s| c.status.as_str() == s)
            })
            .cloned()
            .collect();
        newest_first(&mut found, |c| c.created_at.as_str());
        Ok(paginate(found, query, 12))
    }

    async fn get_contact(&self, id: &str) -> ApiResult<Contact> {
        let mut state = self.lock();
        find_mut(&mut state.contacts, id, "Contact").map(|c| c.clone())
    }

    async fn update_contact_status(&self, id: &str, status: ContactStatus) -> ApiResult<Contact> {
        let mut state = self.lock();
        let contact = find_mut(&mut state.contacts, id, "Contact")?;
        contact.status = status;
        contact.updated_at = timestamp();
        Ok(contact.clone())
    }

    async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        remove(&mut self.lock().contacts, id, "Contact")
    }

    async fn contact_stats(&self) -> ApiResult<ContactStats> {
        Ok(ContactStats::tally(&self.lock().contacts))
    }

    // ---- dashboard ----

    async fn dashboard_overview(&self) -> ApiResult<DashboardOverview> {
        let state = self.lock();
        let now = Utc::now();
        Ok(DashboardOverview {
            total_admins: 1,
            total_products: state.products.len() as u64,
            total_contacts: state.contacts.len() as u64,
            total_employees: state.id_cards.len() as u64,
            total_departments: state.departments.len() as u64,
            total_designations: state.designations.len() as u64,
            recent_products: count_recent(state.products.iter().map(|p| p.created_at.as_str()), now),
            recent_contacts: count_recent(state.contacts.iter().map(|c| c.created_at.as_str()), now),
            recent_employees: count_recent(state.id_cards.iter().map(|c| c.created_at.as_str()), now),
            recent_departments: count_recent(state.departments.iter().map(|d| d.created_at.as_str()), now),
            recent_designations: count_recent(state.designations.iter().map(|d| d.created_at.as_str()), now),
            pending_contacts: state
                .contacts
                .iter()
                .filter(|c| c.status == ContactStatus::New)
                .count() as u64,
            recent_logins: 1,
        })
    }

    async fn dashboard_charts(&self) -> ApiResult<ChartData> {
        let state = self.lock();
        let cards: Vec<IdCard> = state
            .id_cards
            .iter()
            .map(|c| state.populate_card(c.clone()))
            .collect();
        Ok(ChartData {
            products_by_month: by_month(state.products.iter().map(|p| p.created_at.as_str())),
            contacts_by_month: by_month(state.contacts.iter().map(|c| c.created_at.as_str())),
            employees_by_month: by_month(state.id_cards.iter().map(|c| c.created_at.as_str())),
            contact_status_distribution: distribution(
                state.contacts.iter().map(|c| c.status.as_str()),
            ),
            employee_type_distribution: distribution(
                state.id_cards.iter().map(|c| c.employee_type.as_str()),
            ),
            department_distribution: distribution(cards.iter().map(|c| {
                c.department
                    .populated()
                    .map(|d| d.name.as_str())
                    .unwrap_or("Unassigned")
            })),
            designation_distribution: distribution(cards.iter().map(|c| {
                c.designation
                    .populated()
                    .map(|d| d.title.as_str())
                    .unwrap_or("Unassigned")
            })),
        })
    }

    async fn recent_activity(&self, limit: u32) -> ApiResult<RecentActivity> {
        let state = self.lock();
        let limit = limit.max(1) as usize;
        let creator = state.creator();
        let named = |id: &str, label: &str, is_title: bool| NamedRef {
            id: id.to_string(),
            name: if is_title { String::new() } else { label.to_string() },
            title: if is_title { label.to_string() } else { String::new() },
            full_name: String::new(),
        };

        let mut products = state.products.clone();
        newest_first(&mut products, |p| p.created_at.as_str());
        let mut contacts = state.contacts.clone();
        newest_first(&mut contacts, |c| c.created_at.as_str());
        let mut cards: Vec<IdCard> = state
            .id_cards
            .iter()
            .map(|c| state.populate_card(c.clone()))
            .collect();
        newest_first(&mut cards, |c| c.created_at.as_str());
        let mut departments = state.departments.clone();
        newest_first(&mut departments, |d| d.created_at.as_str());
        let mut designations: Vec<Designation> = state
            .designations
            .iter()
            .map(|d| state.populate_designation(d.clone()))
            .collect();
        newest_first(&mut designations, |d| d.created_at.as_str());

        Ok(RecentActivity {
            recent_products: products
                .into_iter()
                .take(limit)
                .map(|p| RecentProduct {
                    id: p.id,
                    product_name: p.product_name,
                    created_by: creator.clone(),
                    created_at: p.created_at,
                })
                .collect(),
            recent_contacts: contacts
                .into_iter()
                .take(limit)
                .map(|c| RecentContact {
                    id: c.id,
                    full_name: c.full_name,
                    email_address: c.email_address,
                    subject: c.subject,
                    status: c.status.as_str().to_string(),
                    created_at: c.created_at,
                })
                .collect(),
            recent_employees: cards
                .into_iter()
                .take(limit)
                .map(|c| RecentEmployee {
                    department: c
                        .department
                        .populated()
                        .map(|d| named(&d.id, &d.name, false)),
                    designation: c
                        .designation
                        .populated()
                        .map(|d| named(&d.id, &d.title, true)),
                    id: c.id,
                    full_name: c.full_name,
                    created_by: creator.clone(),
                    id_card_number: c.id_card_number,
                    created_at: c.created_at,
                })
                .collect(),
            recent_departments: departments
                .into_iter()
                .take(limit)
                .map(|d| RecentDepartment {
                    id: d.id,
                    name: d.name,
                    code: d.code,
                    created_by: creator.clone(),
                    created_at: d.created_at,
                })
                .collect(),
            recent_designations: designations
                .into_iter()
                .take(limit)
                .map(|d| RecentDesignation {
                    department: d
                        .department
                        .populated()
                        .map(|dept| named(&dept.id, &dept.name, false)),
                    id: d.id,
                    title: d.title,
                    level: d.level,
                    created_by: creator.clone(),
                    created_at: d.created_at,
                })
                .collect(),
            recent_logins: vec![RecentLogin {
                id: state.admin.id.clone(),
                full_name: state.admin.full_name.clone(),
                email: state.admin.email.clone(),
                last_login: timestamp(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture() -> Upload {
        Upload::new("face.jpg", "image/jpeg", vec![0xff, 0xd8])
    }

    fn card_draft(name: &str) -> IdCardDraft {
        IdCardDraft {
            full_name: name.to_string(),
            email: "new.hire@company.com".to_string(),
            mobile_number: "+91-9000000000".to_string(),
            date_of_birth: "1999-01-01".to_string(),
            date_of_joining: "2024-02-01".to_string(),
            department: "dept-2".to_string(),
            designation: "desig-3".to_string(),
            ..IdCardDraft::default()
        }
    }

    #[tokio::test]
    async fn login_accepts_only_demo_credentials() {
        let demo = DemoBackend::new();
        let ok = demo
            .login(&Credentials {
                email: "admin@mychoice.com".into(),
                password: "demo123".into(),
            })
            .await
            .unwrap();
        assert_eq!(ok.admin.full_name, "Demo Admin User");
        assert!(ok.token.is_empty());

        let err = demo
            .login(&Credentials {
                email: "admin@mychoice.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(""),
            "Invalid credentials. Use admin@mychoice.com / demo123"
        );
    }

    #[tokio::test]
    async fn signup_and_profile_update_replace_demo_admin() {
        let demo = DemoBackend::new();
        let created = demo
            .signup(&SignupRequest::admin("Asha Roy", "asha@mychoice.com", "secret1"))
            .await
            .unwrap();
        assert!(created.admin.id.starts_with("demo-"));
        let updated = demo
            .update_profile(&ProfileUpdate {
                full_name: Some("Asha R.".into()),
                email: None,
            })
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Asha R.");
        assert_eq!(demo.profile().await.unwrap().email, "asha@mychoice.com");
        demo.change_password(&PasswordChange::default()).await.unwrap();
    }

    #[tokio::test]
    async fn demo_login_after_signup_is_fixture_admin() {
        let demo = DemoBackend::new();
        demo.signup(&SignupRequest::admin("Asha Roy", "asha@x.com", "secret1"))
            .await
            .unwrap();
        let payload = demo
            .login(&Credentials {
                email: "admin@mychoice.com".into(),
                password: "demo123".into(),
            })
            .await
            .unwrap();
        assert_eq!(payload.admin.email, "admin@mychoice.com");
        assert_eq!(payload.admin.full_name, "Demo Admin User");
        assert_eq!(demo.profile().await.unwrap().id, "demo-user-id");
    }

    #[tokio::test]
    async fn department_search_is_case_insensitive() {
        let demo = DemoBackend::new();
        let page = demo
            .list_departments(&ListQuery::page(1, 10).with_search("FIN"))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Finance");

        let by_description = demo
            .list_departments(&ListQuery::page(1, 10).with_search("recruitment"))
            .await
            .unwrap();
        assert_eq!(by_description.items[0].code, "HR");
    }

    #[tokio::test]
    async fn duplicate_department_code_is_rejected() {
        let demo = DemoBackend::new();
        let err = demo
            .create_department(&DepartmentDraft {
                name: "Engineering Two".into(),
                description: String::new(),
                code: "eng".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message(""), "Department code already exists");
    }

    #[tokio::test]
    async fn designations_filter_by_department_and_populate() {
        let demo = DemoBackend::new();
        let page = demo
            .list_designations(&ListQuery::page(1, 10).with_department("dept-1"))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page
            .items
            .iter()
            .all(|d| d.department.populated().map(|p| p.name.as_str()) == Some("Engineering")));

        let hr = demo.designations_by_department("dept-2").await.unwrap();
        assert_eq!(hr.len(), 1);
        assert_eq!(hr[0].title, "HR Manager");
    }

    #[tokio::test]
    async fn pagination_maths() {
        let demo = DemoBackend::new();
        let first = demo.list_id_cards(&ListQuery::page(1, 2)).await.unwrap();
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 2);
        let last = demo.list_id_cards(&ListQuery::page(3, 2)).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next());
    }

    #[tokio::test]
    async fn id_card_filters_combine() {
        let demo = DemoBackend::new();
        let page = demo
            .list_id_cards(
                &ListQuery::page(1, 10)
                    .with_department("dept-1")
                    .with_employee_type("intern"),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id_card_number, "EMP005");

        let by_number = demo
            .list_id_cards(&ListQuery::page(1, 10).with_search("emp003"))
            .await
            .unwrap();
        assert_eq!(by_number.items[0].full_name, "Michael Brown");
    }

    #[tokio::test]
    async fn new_cards_take_next_number_and_persist() {
        let demo = DemoBackend::new();
        let created = demo
            .create_id_card(&card_draft("Priya Sen"), picture())
            .await
            .unwrap();
        assert_eq!(created.id_card_number, "EMP006");
        assert!(created
            .employee_picture
            .starts_with("/uploads/employees/pictures/employee-"));
        assert!(created.employee_picture.ends_with(".jpg"));
        assert_eq!(
            created.department.populated().map(|d| d.name.as_str()),
            Some("Human Resources")
        );

        let shared = demo.clone();
        let page = shared.list_id_cards(&ListQuery::page(1, 10)).await.unwrap();
        assert_eq!(page.total, 6);
        assert_eq!(page.items[0].full_name, "Priya Sen");

        demo.delete_id_card("idcard-5").await.unwrap();
        let again = demo
            .create_id_card(&card_draft("Next Hire"), picture())
            .await
            .unwrap();
        assert_eq!(again.id_card_number, "EMP007");
    }

    #[tokio::test]
    async fn dangling_references_stay_as_ids() {
        let demo = DemoBackend::new();
        let card = demo.get_id_card_by_number("EMP004").await.unwrap();
        assert_eq!(card.department, Ref::Id("dept-4".into()));
        assert!(card.designation.populated().is_none());
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let demo = DemoBackend::new();
        assert_eq!(
            demo.delete_department("nope").await.unwrap_err(),
            ApiError::NotFound("Department".into())
        );
        assert!(demo.get_product("nope").await.is_err());
    }

    #[tokio::test]
    async fn product_lifecycle() {
        let demo = DemoBackend::new();
        let created = demo
            .create_product(
                &ProductDraft {
                    product_name: "Air Cooler".into(),
                    product_features: vec!["Honeycomb pads".into(), " ".into()],
                    price: Some(0.0),
                    category: Some("Home Comfort".into()),
                    ..ProductDraft::default()
                },
                Upload::new("cooler.webp", "image/webp", vec![1]),
            )
            .await
            .unwrap();
        assert_eq!(created.product_features, vec!["Honeycomb pads".to_string()]);
        assert!(created.price.is_none());
        assert!(created.main_image.ends_with(".webp"));

        let with_images = demo
            .upload_product_images(&created.id, vec![picture(), picture()])
            .await
            .unwrap();
        assert_eq!(with_images.additional_images.len(), 2);

        let comfort = demo
            .list_products(&ListQuery::page(1, 10).with_category("Home Comfort"))
            .await
            .unwrap();
        assert_eq!(comfort.total, 2);

        demo.delete_product(&created.id).await.unwrap();
        assert_eq!(demo.list_products(&ListQuery::page(1, 10)).await.unwrap().total, 3);
    }

    #[tokio::test]
    async fn contact_status_feeds_stats() {
        let demo = DemoBackend::new();
        let before = demo.contact_stats().await.unwrap();
        assert_eq!(before.total, 5);
        assert_eq!(before.new, 2);

        demo.update_contact_status("contact-1", ContactStatus::Replied)
            .await
            .unwrap();
        let after = demo.contact_stats().await.unwrap();
        assert_eq!(after.new, 1);
        assert_eq!(after.replied, 2);

        let new_only = demo
            .list_contacts(&ListQuery::page(1, 12).with_status("new"))
            .await
            .unwrap();
        assert_eq!(new_only.items.len(), 1);
        assert_eq!(new_only.items[0].full_name, "Arjun Mehta");
    }

    #[tokio::test]
    async fn aggregates_follow_records() {
        let demo = DemoBackend::new();
        let overview = demo.dashboard_overview().await.unwrap();
        assert_eq!(overview.total_employees, 5);
        assert_eq!(overview.total_departments, 3);
        assert_eq!(overview.pending_contacts, 2);
        // Departments are stamped at seeding time.
        assert_eq!(overview.recent_departments, 3);

        let stats = demo.id_card_stats().await.unwrap();
        assert_eq!(stats.employee_type_distribution.full_time, 2);
        assert_eq!(stats.department_distribution["dept-1"], 2);
        assert_eq!(stats.recent_id_cards.len(), 5);

        let charts = demo.dashboard_charts().await.unwrap();
        assert_eq!(
            charts.employees_by_month,
            vec![ChartPoint {
                key: MonthKey {
                    year: 2024,
                    month: 1
                },
                count: 5
            }]
        );
        assert_eq!(charts.department_distribution[0].key, "Engineering");

        let activity = demo.recent_activity(2).await.unwrap();
        assert_eq!(activity.recent_products.len(), 2);
        assert_eq!(activity.recent_products[0].product_name, "Hair Dryer Pro");
        assert_eq!(activity.recent_logins.len(), 1);
    }

    #[tokio::test]
    async fn reset_restores_fixtures() {
        let demo = DemoBackend::new();
        demo.delete_department("dept-1").await.unwrap();
        demo.reset();
        assert_eq!(demo.active_departments().await.unwrap().len(), 3);
    }
}
