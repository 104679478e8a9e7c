//! Address bar resolution: free text becomes a search, google hosts get the embed flag.
//!
//! In the browser the flag is applied through `URL`/`URLSearchParams`. Native builds use an
//! equivalent query rewriter so resolution stays testable off-wasm.

pub(crate) const HOME_URL: &str = "https://www.google.com/webhp?igu=1";
pub(crate) const HOME_ADDRESS: &str = "https://www.google.com";

const SEARCH_URL: &str = "https://www.google.com/search?q=";
const EMBED_PARAM: &str = "igu";
const EMBED_HOST: &str = "google.com";

/// Turns whatever was typed into the address bar into the URL loaded by the frame.
pub(crate) fn resolve_address(input: &str) -> String {
    let url = if has_http_scheme(input) {
        input.to_string()
    } else {
        let mut url = String::from(SEARCH_URL);
        encode_uri_component_into(&mut url, input);
        url
    };

    with_embed_flag(&url).unwrap_or(url)
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Returns the re-serialized URL with `igu=1` set, or `None` when the host is not google's
/// or the URL does not parse.
#[cfg(target_arch = "wasm32")]
fn with_embed_flag(url: &str) -> Option<String> {
    let parsed = web_sys::Url::new(url).ok()?;
    if !parsed.hostname().contains(EMBED_HOST) {
        return None;
    }
    parsed.search_params().set(EMBED_PARAM, "1");
    Some(parsed.href())
}

#[cfg(not(target_arch = "wasm32"))]
fn with_embed_flag(url: &str) -> Option<String> {
    let parts = split_url(url)?;
    if !parts.hostname().contains(EMBED_HOST) {
        return None;
    }
    Some(parts.with_query_param(EMBED_PARAM, "1"))
}

#[cfg(not(target_arch = "wasm32"))]
struct UrlParts<'a> {
    scheme: &'a str,
    authority: &'a str,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

#[cfg(not(target_arch = "wasm32"))]
fn split_url(url: &str) -> Option<UrlParts<'_>> {
    let scheme_len = url.find("://")?;
    let scheme_end = scheme_len + 3;
    let (rest, fragment) = match url.find('#') {
        Some(idx) if idx > scheme_end => (&url[..idx], Some(&url[idx + 1..])),
        _ => (url, None),
    };
    let (rest, query) = match rest.find('?') {
        Some(idx) if idx > scheme_end => (&rest[..idx], Some(&rest[idx + 1..])),
        _ => (rest, None),
    };
    let path_start = rest[scheme_end..]
        .find('/')
        .map_or(rest.len(), |idx| scheme_end + idx);
    if path_start == scheme_end {
        return None;
    }

    Some(UrlParts {
        scheme: &url[..scheme_len],
        authority: &rest[scheme_end..path_start],
        path: &rest[path_start..],
        query,
        fragment,
    })
}

#[cfg(not(target_arch = "wasm32"))]
impl UrlParts<'_> {
    fn host(&self) -> &str {
        self.authority.rsplit('@').next().unwrap_or(self.authority)
    }

    fn hostname(&self) -> String {
        let host = self.host();
        host.split(':').next().unwrap_or(host).to_ascii_lowercase()
    }

    /// `URLSearchParams.set`: the first `name` keeps its slot, later duplicates are dropped,
    /// and a missing `name` is appended. The whole query is re-serialized as form data.
    fn with_query_param(&self, name: &str, value: &str) -> String {
        let mut pairs = parse_form_query(self.query.unwrap_or(""));
        match pairs.iter().position(|(key, _)| key == name) {
            Some(first) => {
                pairs[first].1 = value.to_string();
                let mut idx = 0;
                pairs.retain(|(key, _)| {
                    let keep = idx <= first || key != name;
                    idx += 1;
                    keep
                });
            }
            None => pairs.push((name.to_string(), value.to_string())),
        }

        let userinfo = &self.authority[..self.authority.len() - self.host().len()];
        let path = if self.path.is_empty() { "/" } else { self.path };
        let mut url = format!(
            "{}://{}{}{}?",
            self.scheme.to_ascii_lowercase(),
            userinfo,
            self.host().to_ascii_lowercase(),
            path
        );
        for (idx, (key, val)) in pairs.iter().enumerate() {
            if idx > 0 {
                url.push('&');
            }
            form_encode_into(&mut url, key);
            url.push('=');
            form_encode_into(&mut url, val);
        }
        if let Some(fragment) = self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_form_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key), form_decode(val))
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn form_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'+' => out.push(b' '),
            b'%' if idx + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[idx + 1..idx + 3]).ok();
                match hex.and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        idx += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            byte => out.push(byte),
        }
        idx += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// `application/x-www-form-urlencoded` byte serializer, as used by `URLSearchParams`.
#[cfg(not(target_arch = "wasm32"))]
fn form_encode_into(out: &mut String, s: &str) {
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => push_percent(out, b),
        }
    }
}

/// Percent-encodes `s` like `encodeURIComponent` and appends the result to `out`.
fn encode_uri_component_into(out: &mut String, s: &str) {
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => push_percent(out, b),
        }
    }
}

fn push_percent(out: &mut String, b: u8) {
    out.push('%');
    out.push(hex_digit(b >> 4));
    out.push(hex_digit(b & 0xF));
}

fn hex_digit(nibble: u8) -> char {
    if nibble < 10 {
        (b'0' + nibble) as char
    } else {
        (b'A' + nibble - 10) as char
    }
}
