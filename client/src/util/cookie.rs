//! Bearer token persistence in the `token` browser cookie.
//!
//! Reads and writes go straight to `document.cookie`; nothing is cached, so
//! a cookie cleared in another tab is seen on the next request. Requires a
//! browser environment; native builds store nothing.

use taskdeck::{ApiError, TokenStore};

pub const TOKEN_COOKIE: &str = "token";

/// [`TokenStore`] over `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn token(&self) -> Option<String> {
        read_cookie_header().and_then(|raw| cookie_value(&raw, TOKEN_COOKIE))
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        write_cookie_header(&set_cookie(TOKEN_COOKIE, token))
    }

    fn clear(&self) -> Result<(), ApiError> {
        write_cookie_header(&expire_cookie(TOKEN_COOKIE))
    }
}

/// Value of `name` in a `document.cookie` string. Empty values count as
/// absent.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub fn set_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; SameSite=Lax")
}

pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; SameSite=Lax")
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

fn read_cookie_header() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_cookie_header(cookie: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let document = html_document().ok_or_else(|| ApiError::Storage("no document available".into()))?;
        document
            .set_cookie(cookie)
            .map_err(|e| ApiError::Storage(format!("cookie write rejected: {e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cookie;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
