//! One-shot flash messages backed by a cookie. A write handler sets the
//! flash and redirects; the next rendered page takes it, which also clears
//! the cookie. Read-once-then-clear, scoped to the client, no server-side
//! session store.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash-success",
            FlashKind::Error => "flash-error",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

/// Write the flash slot. Messages are app-authored constants, so a plain
/// `kind|text` encoding keeps the cookie free of characters that need
/// quoting.
pub fn set_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut cookie = Cookie::new(
        FLASH_COOKIE,
        format!("{}|{}", flash.kind.as_str(), flash.text),
    );
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// Read and clear the flash slot.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|cookie| {
        let (kind, text) = cookie.value().split_once('|')?;
        Some(Flash {
            kind: FlashKind::parse(kind)?,
            text: text.to_string(),
        })
    });

    let mut removal = Cookie::from(FLASH_COOKIE);
    removal.set_path("/");
    let jar = jar.remove(removal);

    (jar, flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_take_round_trips() {
        let jar = set_flash(CookieJar::new(), Flash::success("Product created successfully!"));
        let (jar, flash) = take_flash(jar);
        assert_eq!(flash, Some(Flash::success("Product created successfully!")));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn take_on_empty_jar_is_none() {
        let (_, flash) = take_flash(CookieJar::new());
        assert_eq!(flash, None);
    }

    #[test]
    fn garbled_cookie_reads_as_no_flash() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "no-delimiter"));
        let (_, flash) = take_flash(jar);
        assert_eq!(flash, None);
    }

    #[test]
    fn error_kind_survives_the_round_trip() {
        let jar = set_flash(CookieJar::new(), Flash::error("Product not found."));
        let (_, flash) = take_flash(jar);
        let flash = flash.expect("flash present");
        assert_eq!(flash.kind, FlashKind::Error);
        assert_eq!(flash.text, "Product not found.");
    }
}
