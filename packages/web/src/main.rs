use dioxus::prelude::*;
use views::{Dashboard, Departments, Designations, Guarded, IdCards, Leads, Login, NotFound, Products, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Guarded)]
        #[route("/")]
        Dashboard {},
        #[route("/leads")]
        Leads {},
        #[route("/products")]
        Products {},
        #[route("/departments")]
        Departments {},
        #[route("/designations")]
        Designations {},
        #[route("/id-cards")]
        IdCards {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn for_nav(item: ui::NavItem) -> Self {
        match item {
            ui::NavItem::Dashboard => Route::Dashboard {},
            ui::NavItem::Leads => Route::Leads {},
            ui::NavItem::Products => Route::Products {},
            ui::NavItem::Departments => Route::Departments {},
            ui::NavItem::Designations => Route::Designations {},
            ui::NavItem::IdCards => Route::IdCards {},
            ui::NavItem::Profile => Route::Profile {},
        }
    }

    fn nav_item(&self) -> ui::NavItem {
        match self {
            Route::Leads {} => ui::NavItem::Leads,
            Route::Products {} => ui::NavItem::Products,
            Route::Departments {} => ui::NavItem::Departments,
            Route::Designations {} => ui::NavItem::Designations,
            Route::IdCards {} => ui::NavItem::IdCards,
            Route::Profile {} => ui::NavItem::Profile,
            _ => ui::NavItem::Dashboard,
        }
    }
}

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    tracing::info!("starting Mychoice admin dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Mychoice Admin" }
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }
        ui::ToastProvider {
            ui::AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_item_has_a_route() {
        for item in ui::NavItem::ALL {
            assert_eq!(Route::for_nav(item).nav_item(), item);
        }
    }

    #[test]
    fn paths() {
        assert_eq!(Route::IdCards {}.to_string(), "/id-cards");
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(
            "/nowhere".parse::<Route>().ok(),
            Some(Route::NotFound { segments: vec!["nowhere".to_string()] })
        );
    }
}
