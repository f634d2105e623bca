use std::time::Duration;

use api::media::product_image_url;
use api::validation::{self, parse_price};
use api::{ApiResult, Backend, ListQuery, Page, Product, ProductDraft, Upload};
use dioxus::prelude::*;
use store::Gateway;

use crate::components::{ActiveBadge, ConfirmDialog, Field, Modal, Pagination, SearchBox, Spinner};
use crate::format::{inr, short_date};
use crate::icons::{FaEye, FaPenToSquare, FaPlus, FaTrash, FaXmark};
use crate::{messages, picked_upload, picked_uploads, preview_url, use_auth, use_toasts, Icon};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Create,
    Edit(Product),
}

/// Create or update a product, then push any picked images.
async fn save_product(
    gateway: &Gateway,
    existing: Option<&Product>,
    draft: &ProductDraft,
    main_image: Option<Upload>,
    additional: Vec<Upload>,
) -> ApiResult<Product> {
    let mut product = match (existing, main_image) {
        (None, Some(main)) => gateway.create_product(draft, main).await?,
        (None, None) => {
            return Err(api::ApiError::Invalid(vec!["Main image is required".to_string()]))
        }
        (Some(existing), main) => {
            let updated = gateway.update_product(&existing.id, draft).await?;
            match main {
                Some(main) => gateway.update_product_main_image(&updated.id, main).await?,
                None => updated,
            }
        }
    };
    if !additional.is_empty() {
        product = gateway.upload_product_images(&product.id, additional).await?;
    }
    Ok(product)
}

fn price_label(price: Option<f64>) -> String {
    price.map(inr).unwrap_or_else(|| "Price on request".to_string())
}

#[component]
pub fn ProductsView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let limit = auth.config().paging.products;
    let origin = auth.config().api.asset_origin;

    let mut page = use_signal(|| 1u32);
    let mut typed = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut generation = use_signal(|| 0u64);
    let mut category = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);
    let mut editor = use_signal(|| None::<Editor>);
    let mut viewing = use_signal(|| None::<Product>);
    let mut deleting = use_signal(|| None::<Product>);
    let mut busy = use_signal(|| false);

    let categories = use_resource(move || async move {
        auth.gateway().product_categories().await.unwrap_or_else(|e| {
            tracing::warn!("could not load product categories: {e}");
            Vec::new()
        })
    });

    let products = use_resource(move || async move {
        let _ = reload();
        let query = ListQuery::page(page(), limit)
            .with_search(&search())
            .with_category(&category());
        match auth.gateway().list_products(&query).await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::PRODUCT_LOAD_ERROR);
                Page::empty()
            }
        }
    });

    // Only the last keystroke within the window triggers a query.
    let on_search = move |value: String| {
        typed.set(value.clone());
        generation += 1;
        let mine = *generation.peek();
        spawn(async move {
            crate::sleep(SEARCH_DEBOUNCE).await;
            if *generation.peek() == mine {
                search.set(value);
                page.set(1);
            }
        });
    };

    let on_saved = move |(product, created): (Product, bool)| {
        tracing::info!("saved product {}", product.id);
        let message = if created {
            messages::PRODUCT_CREATE_SUCCESS
        } else {
            messages::PRODUCT_UPDATE_SUCCESS
        };
        toasts.success(auth.announce(message));
        editor.set(None);
        reload += 1;
    };

    let confirm_delete = move |_| {
        let Some(product) = deleting() else { return };
        spawn(async move {
            busy.set(true);
            match auth.gateway().delete_product(&product.id).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::PRODUCT_DELETE_SUCCESS));
                    deleting.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::PRODUCT_DELETE_ERROR),
            }
            busy.set(false);
        });
    };

    let category_names: Vec<String> = categories
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.name)
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Products" }
                    p { class: "page-subtitle", "Manage the product catalogue" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| editor.set(Some(Editor::Create)),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Product"
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: typed(),
                    placeholder: "Search products...",
                    on_input: on_search,
                }
                select {
                    class: "select",
                    value: category(),
                    onchange: move |evt: FormEvent| {
                        category.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Categories" }
                    for name in category_names.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            match products() {
                None => rsx! { Spinner { label: "Loading products..." } },
                Some(found) if found.items.is_empty() => rsx! {
                    div { class: "empty-state", "No products found" }
                },
                Some(found) => rsx! {
                    div {
                        class: "card table-card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Product" }
                                    th { "Category" }
                                    th { "Price" }
                                    th { "Features" }
                                    th { "Status" }
                                    th { class: "actions-col", "Actions" }
                                }
                            }
                            tbody {
                                for product in found.items.iter().cloned() {
                                    tr {
                                        key: "{product.id}",
                                        td {
                                            div {
                                                class: "product-cell",
                                                img {
                                                    class: "thumb",
                                                    src: product_image_url(&origin, &product.main_image),
                                                    alt: "{product.product_name}",
                                                }
                                                span { class: "strong", "{product.product_name}" }
                                            }
                                        }
                                        td { {product.category.clone().unwrap_or_else(|| "Uncategorized".to_string())} }
                                        td { {price_label(product.price)} }
                                        td { "{product.product_features.len()} features" }
                                        td { ActiveBadge { active: product.is_active } }
                                        td {
                                            class: "row-actions",
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "View",
                                                onclick: {
                                                    let product = product.clone();
                                                    move |_| viewing.set(Some(product.clone()))
                                                },
                                                Icon { icon: FaEye, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "Edit",
                                                onclick: {
                                                    let product = product.clone();
                                                    move |_| editor.set(Some(Editor::Edit(product.clone())))
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon btn-danger-text",
                                                title: "Delete",
                                                onclick: {
                                                    let product = product.clone();
                                                    move |_| deleting.set(Some(product.clone()))
                                                },
                                                Icon { icon: FaTrash, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page: found.page,
                        total_pages: found.total_pages,
                        total: found.total,
                        limit: found.limit,
                        on_change: move |p: u32| page.set(p),
                    }
                },
            }

            if let Some(target) = editor() {
                ProductForm {
                    existing: match target {
                        Editor::Create => None,
                        Editor::Edit(product) => Some(product),
                    },
                    categories: category_names.clone(),
                    on_saved: on_saved,
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some(product) = viewing() {
                Modal {
                    title: "Product Details",
                    wide: true,
                    on_close: move |_| viewing.set(None),
                    div {
                        class: "product-detail",
                        img {
                            class: "product-hero",
                            src: product_image_url(&origin, &product.main_image),
                            alt: "{product.product_name}",
                        }
                        div {
                            h3 { "{product.product_name}" }
                            p { class: "price", {price_label(product.price)} }
                            if let Some(category) = &product.category {
                                p { class: "muted", "{category}" }
                            }
                            if let Some(description) = &product.description {
                                p { "{description}" }
                            }
                            h4 { "Features" }
                            ul {
                                for feature in product.product_features.iter() {
                                    li { "{feature}" }
                                }
                            }
                            p { class: "muted", "Added {short_date(&product.created_at)}" }
                        }
                    }
                    if !product.additional_images.is_empty() {
                        div {
                            class: "image-strip",
                            for image in product.additional_images.iter() {
                                img { key: "{image}", class: "thumb-lg", src: product_image_url(&origin, image) }
                            }
                        }
                    }
                }
            }

            if let Some(product) = deleting() {
                ConfirmDialog {
                    title: "Delete Product",
                    message: format!("Are you sure you want to delete \"{}\"? This cannot be undone.", product.product_name),
                    busy: busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn ProductForm(
    existing: Option<Product>,
    categories: Vec<String>,
    on_saved: EventHandler<(Product, bool)>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let origin = auth.config().api.asset_origin;
    let creating = existing.is_none();

    let initial = existing.clone();
    let mut draft = use_signal(move || {
        let mut draft = initial.as_ref().map(ProductDraft::from).unwrap_or_default();
        if draft.product_features.is_empty() {
            draft.product_features.push(String::new());
        }
        draft
    });
    let initial_price = existing.as_ref().and_then(|p| p.price);
    let mut price = use_signal(move || initial_price.map(|p| p.to_string()).unwrap_or_default());
    let mut main_image = use_signal(|| None::<Upload>);
    let mut additional = use_signal(Vec::<Upload>::new);
    let mut busy = use_signal(|| false);

    let current_main = existing.as_ref().map(|p| p.main_image.clone());
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let existing = existing.clone();
        let price_input = price();
        let mut body = draft();
        if let Err(e) = validation::product(&body, &price_input, creating, main_image.peek().is_some()) {
            toasts.error(e.user_message(""));
            return;
        }
        body.price = parse_price(&price_input).ok().flatten();
        let body = body.normalized();
        spawn(async move {
            busy.set(true);
            let result = save_product(
                &auth.gateway(),
                existing.as_ref(),
                &body,
                main_image(),
                additional(),
            )
            .await;
            match result {
                Ok(product) => on_saved.call((product, creating)),
                Err(e) => auth.report(toasts, &e, messages::PRODUCT_SAVE_ERROR),
            }
            busy.set(false);
        });
    };

    let main_preview = main_image
        .read()
        .as_ref()
        .map(preview_url)
        .or_else(|| current_main.map(|path| product_image_url(&origin, &path)));

    rsx! {
        Modal {
            title: if creating { "Add Product".to_string() } else { "Edit Product".to_string() },
            wide: true,
            on_close: on_close,
            form {
                class: "form-stack",
                onsubmit: submit,
                Field {
                    label: "Product Name",
                    required: true,
                    input {
                        class: "input",
                        value: draft().product_name,
                        oninput: move |evt: FormEvent| draft.write().product_name = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Category",
                        select {
                            class: "select",
                            value: draft().category.unwrap_or_default(),
                            onchange: move |evt: FormEvent| draft.write().category = Some(evt.value()),
                            option { value: "", "Select category" }
                            for name in categories.iter() {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    }
                    Field {
                        label: "Price (₹)",
                        input {
                            class: "input",
                            inputmode: "decimal",
                            placeholder: "Leave empty for price on request",
                            value: price(),
                            oninput: move |evt: FormEvent| price.set(evt.value()),
                        }
                    }
                }
                Field {
                    label: "Description",
                    textarea {
                        class: "input",
                        rows: 3,
                        value: draft().description.unwrap_or_default(),
                        oninput: move |evt: FormEvent| draft.write().description = Some(evt.value()),
                    }
                }
                Field {
                    label: "Features",
                    required: true,
                    div {
                        class: "feature-list",
                        for (i, feature) in draft().product_features.into_iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "feature-row",
                                input {
                                    class: "input",
                                    placeholder: "Feature {i + 1}",
                                    value: feature,
                                    oninput: move |evt: FormEvent| {
                                        if let Some(slot) = draft.write().product_features.get_mut(i) {
                                            *slot = evt.value();
                                        }
                                    },
                                }
                                if draft().product_features.len() > 1 {
                                    button {
                                        r#type: "button",
                                        class: "btn btn-ghost btn-icon",
                                        title: "Remove feature",
                                        onclick: move |_| {
                                            draft.write().product_features.remove(i);
                                        },
                                        Icon { icon: FaXmark, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-link",
                            onclick: move |_| draft.write().product_features.push(String::new()),
                            Icon { icon: FaPlus, width: 10, height: 10 }
                            " Add feature"
                        }
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Main Image",
                        required: creating,
                        if let Some(src) = main_preview {
                            img { class: "thumb-lg", src: src }
                        }
                        input {
                            class: "input",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt: FormEvent| async move {
                                main_image.set(picked_upload(&evt).await);
                            },
                        }
                    }
                    Field {
                        label: "Additional Images",
                        div {
                            class: "image-strip",
                            for (i, upload) in additional().iter().enumerate() {
                                img { key: "{i}", class: "thumb", src: preview_url(upload) }
                            }
                        }
                        input {
                            class: "input",
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            onchange: move |evt: FormEvent| async move {
                                additional.set(picked_uploads(&evt).await);
                            },
                        }
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: busy(),
                        if busy() { "Saving..." } else if creating { "Create Product" } else { "Update Product" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> Upload {
        Upload::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            product_name: "Induction Cooktop".into(),
            product_features: vec!["Touch panel".into()],
            price: Some(2899.0),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn missing_price_reads_on_request() {
        assert_eq!(price_label(None), "Price on request");
        assert_eq!(price_label(Some(3499.0)), "₹3,499.00");
    }

    #[tokio::test]
    async fn create_then_attach_extra_images() {
        let gateway = Gateway::Demo(store::DemoBackend::new());
        let product = save_product(
            &gateway,
            None,
            &draft(),
            Some(image("front.png")),
            vec![image("side.png"), image("back.png")],
        )
        .await
        .unwrap();
        assert_eq!(product.product_name, "Induction Cooktop");
        assert_eq!(product.additional_images.len(), 2);
    }

    #[tokio::test]
    async fn create_without_main_image_is_refused() {
        let gateway = Gateway::Demo(store::DemoBackend::new());
        let err = save_product(&gateway, None, &draft(), None, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, api::ApiError::Invalid(_)));
    }

    #[tokio::test]
    async fn edit_keeps_identity_and_swaps_main_image() {
        let gateway = Gateway::Demo(store::DemoBackend::new());
        let existing = gateway.get_product("prod-1").await.unwrap();
        let mut changed = ProductDraft::from(&existing);
        changed.price = None;
        let saved = save_product(&gateway, Some(&existing), &changed, Some(image("new.png")), Vec::new())
            .await
            .unwrap();
        assert_eq!(saved.id, "prod-1");
        assert_eq!(saved.price, None);
        assert_ne!(saved.main_image, existing.main_image);
    }
}
