#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Login,
    Menu,
    Game { topic: String },
    NotFound,
}

impl Route {
    pub(crate) fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

pub(crate) fn parse_route(hash: &str) -> Route {
    let raw = hash.trim().trim_start_matches('#');
    let raw = raw.trim_matches('/');
    if raw.is_empty() {
        return Route::Menu;
    }
    let mut parts = raw.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("login"), None, _) => Route::Login,
        (Some("menu"), None, _) => Route::Menu,
        (Some("game"), Some(topic), None) if !topic.trim().is_empty() => Route::Game {
            topic: topic.trim().to_string(),
        },
        _ => Route::NotFound,
    }
}

pub(crate) fn route_hash(route: &Route) -> String {
    match route {
        Route::Login => "#/login".to_string(),
        Route::Menu => "#/menu".to_string(),
        Route::Game { topic } => format!("#/game/{topic}"),
        Route::NotFound => "#/404".to_string(),
    }
}

pub(crate) fn current_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return Route::Menu;
        };
        let hash = window.location().hash().unwrap_or_default();
        parse_route(&hash)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::Menu
    }
}

pub(crate) fn navigate(route: &Route) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.location().set_hash(&route_hash(route));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = route;
    }
}

/// Replaces the current history entry instead of pushing one; used for
/// auth redirects so "back" does not bounce through the login page.
pub(crate) fn redirect(route: &Route) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let new_url = format!("{path}{search}{}", route_hash(route));
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        } else {
            let _ = location.set_hash(&route_hash(route));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(parse_route(""), Route::Menu);
        assert_eq!(parse_route("#"), Route::Menu);
        assert_eq!(parse_route("#/"), Route::Menu);
        assert_eq!(parse_route("#/login"), Route::Login);
        assert_eq!(parse_route("#/menu"), Route::Menu);
        assert_eq!(
            parse_route("#/game/1-1"),
            Route::Game {
                topic: "1-1".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(parse_route("#/nope"), Route::NotFound);
        assert_eq!(parse_route("#/game"), Route::NotFound);
        assert_eq!(parse_route("#/game/1-1/extra"), Route::NotFound);
    }

    #[test]
    fn hash_round_trip() {
        for route in [
            Route::Login,
            Route::Menu,
            Route::Game {
                topic: "1-2".to_string(),
            },
        ] {
            assert_eq!(parse_route(&route_hash(&route)), route);
        }
    }
}
