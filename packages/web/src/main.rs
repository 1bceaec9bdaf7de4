use dioxus::prelude::*;

use views::{Dashboard, Home, Insights, Login, NotFound, Orders, Profile, Register, Shell, Suggestions};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/orders")]
        Orders {},
        #[route("/insights")]
        Insights {},
        #[route("/suggestions")]
        Suggestions {},
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_paths_land_on_not_found() {
        let route = "/no/such/page".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()],
            })
        );
        assert_eq!("/dashboard".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!(Route::Home {}.to_string(), "/");
    }
}
