//! Image URLs for uploaded product images and employee pictures.

use rand::Rng;

pub const PRODUCT_PLACEHOLDER: &str = "https://via.placeholder.com/48x48?text=No+Image";
pub const EMPLOYEE_PLACEHOLDER: &str = "https://via.placeholder.com/150x150?text=No+Photo";
pub const EMPLOYEE_PICTURE_DIR: &str = "/uploads/employees/pictures";

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Resolve a product image path against the backend's asset origin.
///
/// Full URLs pass through, rooted paths get the origin prepended and bare
/// file names are assumed to live under `/uploads/`.
pub fn product_image_url(asset_origin: &str, path: &str) -> String {
    let origin = asset_origin.trim_end_matches('/');
    if path.is_empty() {
        PRODUCT_PLACEHOLDER.to_string()
    } else if is_absolute_url(path) {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}/uploads/{path}")
    }
}

/// Same as [`product_image_url`] but bare names live in the employee pictures folder.
pub fn employee_picture_url(asset_origin: &str, path: &str) -> String {
    let origin = asset_origin.trim_end_matches('/');
    if path.is_empty() {
        EMPLOYEE_PLACEHOLDER.to_string()
    } else if is_absolute_url(path) {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}{EMPLOYEE_PICTURE_DIR}/{path}")
    }
}

/// `employee-<millis>-<random>.<ext>` for a freshly picked picture.
pub fn employee_picture_filename(original_name: &str, now_millis: i64) -> String {
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000);
    let extension = match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "png",
    };
    format!("employee-{now_millis}-{random}.{extension}")
}

pub fn employee_picture_path(filename: &str) -> String {
    format!("{EMPLOYEE_PICTURE_DIR}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:3100";

    #[test]
    fn product_urls() {
        assert_eq!(product_image_url(ORIGIN, ""), PRODUCT_PLACEHOLDER);
        assert_eq!(
            product_image_url(ORIGIN, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            product_image_url(ORIGIN, "/uploads/products/a.png"),
            "http://localhost:3100/uploads/products/a.png"
        );
        assert_eq!(
            product_image_url("http://localhost:3100/", "a.png"),
            "http://localhost:3100/uploads/a.png"
        );
    }

    #[test]
    fn employee_urls() {
        assert_eq!(employee_picture_url(ORIGIN, ""), EMPLOYEE_PLACEHOLDER);
        assert_eq!(
            employee_picture_url(ORIGIN, "employee-1.png"),
            "http://localhost:3100/uploads/employees/pictures/employee-1.png"
        );
        assert_eq!(
            employee_picture_url(ORIGIN, "/uploads/employees/pictures/employee-1.png"),
            "http://localhost:3100/uploads/employees/pictures/employee-1.png"
        );
    }

    #[test]
    fn picture_filename_shape() {
        let name = employee_picture_filename("me.jpeg", 1756465655146);
        assert!(name.starts_with("employee-1756465655146-"));
        assert!(name.ends_with(".jpeg"));
        let random: u32 = name
            .trim_start_matches("employee-1756465655146-")
            .trim_end_matches(".jpeg")
            .parse()
            .unwrap();
        assert!(random < 1_000_000);

        assert!(employee_picture_filename("noext", 1).ends_with(".png"));
        assert_eq!(
            employee_picture_path("x.png"),
            "/uploads/employees/pictures/x.png"
        );
    }
}
