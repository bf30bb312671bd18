use axum::{
    http::{header, HeaderMap},
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;
use url::Url;

use crate::view::theme::THEME_KEY;
use crate::view::Theme;

/// Saved theme from the `portfolio-theme` cookie, if any. Quoted values are
/// accepted; unknown ones read as unset.
pub fn saved_theme(jar: &CookieJar) -> Option<Theme> {
    jar.get(THEME_KEY)
        .and_then(|cookie| Theme::parse(cookie.value_trimmed()))
}

fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_KEY, theme.as_str()))
        .path("/")
        .max_age(time::Duration::days(365))
        .same_site(SameSite::Lax)
        .build()
}

/// Path and query of the referring page; never an external location.
fn back_location(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|r| Url::parse(r).ok())
        .map(|url| match url.query() {
            Some(q) => format!("{}?{q}", url.path()),
            None => url.path().to_string(),
        })
        .unwrap_or_else(|| "/".to_string())
}

/// POST /theme/toggle
/// Flips the saved theme and sends the browser back where it came from.
pub async fn toggle_theme_handler(jar: CookieJar, headers: HeaderMap) -> (CookieJar, Redirect) {
    let next = saved_theme(&jar).unwrap_or_default().toggled();
    debug!("Theme toggled to {}", next.as_str());

    (jar.add(theme_cookie(next)), Redirect::to(&back_location(&headers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use axum::response::IntoResponse;

    fn jar(cookie: &'static str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_saved_theme_from_cookie() {
        assert_eq!(saved_theme(&CookieJar::new()), None);
        assert_eq!(
            saved_theme(&jar("session=abc; portfolio-theme=light")),
            Some(Theme::Light)
        );
        assert_eq!(saved_theme(&jar("portfolio-theme=neon")), None);
    }

    #[test]
    fn test_quoted_cookie_value_is_accepted() {
        assert_eq!(saved_theme(&jar("portfolio-theme=\"light\"")), Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_toggle_sets_long_lived_site_wide_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_static("http://localhost/?page=resume"));

        let response = toggle_theme_handler(jar("portfolio-theme=light"), headers)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?page=resume");

        let set = Cookie::parse(response.headers()[header::SET_COOKIE].to_str().unwrap().to_string())
            .unwrap();
        assert_eq!(set.name(), THEME_KEY);
        assert_eq!(set.value(), "dark");
        assert_eq!(set.path(), Some("/"));
        assert_eq!(set.max_age(), Some(time::Duration::days(365)));
        assert_eq!(set.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_back_location_keeps_only_path_and_query() {
        let mut headers = HeaderMap::new();
        assert_eq!(back_location(&headers), "/");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://evil.example/?page=blog"),
        );
        assert_eq!(back_location(&headers), "/?page=blog");
    }
}
