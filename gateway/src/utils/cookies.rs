use std::time::Duration;

use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, Copy)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub secure: bool,
    pub same_site: SameSite,
}

pub const SESSION_COOKIE_NAME: &str = "token";
pub const SESSION_COOKIE_PATH: &str = "/";

pub fn build_session_cookie(value: &str, max_age: Duration, options: CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite={}",
        SESSION_COOKIE_NAME,
        value,
        SESSION_COOKIE_PATH,
        max_age.as_secs(),
        same_site_value(options.same_site)
    );
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Looks up `name` in a raw `Cookie` request header and returns its
/// URL-decoded value. Values that fail to decode as UTF-8 are treated as
/// absent.
pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            percent_decode_str(value)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned())
        } else {
            None
        }
    })
}

fn same_site_value(same_site: SameSite) -> &'static str {
    match same_site {
        SameSite::Lax => "Lax",
        SameSite::Strict => "Strict",
        SameSite::None => "None",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_session_cookie_includes_security_attributes() {
        let opts = CookieOptions {
            secure: true,
            same_site: SameSite::Lax,
        };
        let cookie = build_session_cookie("abc", Duration::from_secs(86_400), opts);
        assert!(cookie.contains("token=abc"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn build_session_cookie_omits_secure_outside_production() {
        let opts = CookieOptions {
            secure: false,
            same_site: SameSite::Lax,
        };
        let cookie = build_session_cookie("abc", Duration::from_secs(60), opts);
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn extract_cookie_value_finds_matching_name() {
        let header = "a=1; token=session-value; b=2";
        assert_eq!(
            extract_cookie_value(header, "token").as_deref(),
            Some("session-value")
        );
        assert!(extract_cookie_value(header, "missing").is_none());
    }

    #[test]
    fn extract_cookie_value_url_decodes() {
        let header = "token=abc%3D%3D";
        assert_eq!(extract_cookie_value(header, "token").as_deref(), Some("abc=="));
    }
}
