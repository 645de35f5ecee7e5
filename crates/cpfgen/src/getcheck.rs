//! Detection of form endpoints that also answer to `GET`.
//!
//! A form-encoded `POST` is replayed as a `GET` with the body moved into the
//! query string. When the replay succeeds too, the endpoint accepts its
//! parameters from the URL, where they end up in logs, history and `Referer`
//! headers.

/// The only content type whose body can be moved into a query string as-is.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Returns `true` for a `POST` carrying a form-encoded body.
///
/// Media-type parameters such as `; charset=utf-8` are ignored, and both the
/// method and the media type compare case-insensitively.
#[must_use]
pub fn is_form_post(method: &str, content_type: Option<&str>) -> bool {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim);
    method.eq_ignore_ascii_case("POST")
        && media_type.is_some_and(|mt| mt.eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// Builds the `GET` URL carrying `form_body` as its query string.
///
/// The body is appended verbatim after `?`, or after `&` when `url` already
/// has a query. An empty body leaves `url` unchanged.
///
/// ```
/// use cpfgen::post_as_get;
///
/// assert_eq!(post_as_get("/display", "user=a&view=b"), "/display?user=a&view=b");
/// assert_eq!(post_as_get("/display?lang=pt", "user=a"), "/display?lang=pt&user=a");
/// ```
#[must_use]
pub fn post_as_get(url: &str, form_body: &str) -> String {
    if form_body.is_empty() {
        return url.to_string();
    }
    let separator = match url.find('?') {
        Some(i) if i + 1 == url.len() => "",
        Some(_) => "&",
        None => "?",
    };
    format!("{url}{separator}{form_body}")
}

/// Outcome of sending the same parameters by `POST` and by `GET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GetCheck {
    pub post_status: u16,
    pub get_status: u16,
}

impl GetCheck {
    #[must_use]
    pub const fn new(post_status: u16, get_status: u16) -> Self {
        Self {
            post_status,
            get_status,
        }
    }

    /// The endpoint is flagged when the `GET` replay comes back 2xx.
    #[must_use]
    pub const fn flagged(&self) -> bool {
        self.get_status >= 200 && self.get_status < 300
    }
}
