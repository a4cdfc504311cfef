//! `data:` URLs as used in `url(...)` values.
//!
//! A data URL has the form `data:[<mime type>][;base64],<payload>`. The MIME
//! type defaults to `text/plain;charset=US-ASCII`. Parameter values and a
//! plain payload may be percent-escaped; a base64 payload may contain line
//! breaks.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use encoding_rs::{Encoding, WINDOWS_1252};

use crate::Result;
use crate::writer::{CssWriteable, WriterSettings};

pub const DATA_URL_PREFIX: &str = "data:";
pub const BASE64_MARKER: &str = ";base64";
pub const DEFAULT_MIME_TYPE: &str = "text/plain";
pub const DEFAULT_CHARSET: &str = "US-ASCII";

/// Returns true if `url` starts with `data:`, ignoring case and leading whitespace.
pub fn is_data_url(url: &str) -> bool {
    url.trim_start()
        .get(..DATA_URL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DATA_URL_PREFIX))
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c)
}

fn is_token(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_token_char)
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// Resolve `%XX` escapes. Literal text is encoded with `charset`; a `%` not
/// followed by two hex digits is kept as is.
fn percent_decode(text: &str, charset: &'static Encoding) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let (Some(high), Some(low)) = (
                bytes.get(i + 1).copied().and_then(hex_value),
                bytes.get(i + 2).copied().and_then(hex_value),
            )
        {
            out.extend_from_slice(&charset.encode(&text[literal_start..i]).0);
            out.push(high << 4 | low);
            i += 3;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    out.extend_from_slice(&charset.encode(&text[literal_start..]).0);
    out
}

fn percent_encode(bytes: &[u8], keep: impl Fn(char) -> bool, out: &mut String) {
    for &byte in bytes {
        let c = byte as char;
        if byte.is_ascii() && c != '%' && keep(c) {
            out.push(c);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
}

/// A parsed MIME type with its parameters in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    essence: String,
    parameters: Vec<(String, String)>,
}

impl MimeType {
    /// Create a MIME type from `type/subtype`.
    pub fn new(essence: &str) -> Option<Self> {
        let (main, sub) = essence.split_once('/')?;
        let (main, sub) = (main.trim(), sub.trim());
        if !is_token(main) || !is_token(sub) {
            return None;
        }
        Some(Self {
            essence: format!("{}/{}", main.to_ascii_lowercase(), sub.to_ascii_lowercase()),
            parameters: Vec::new(),
        })
    }

    /// Parse `type/subtype;name=value;...`. Parameter values may be quoted
    /// or percent-escaped.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(';');
        let mut mime_type = Self::new(parts.next()?)?;
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (name, value) = part.split_once('=')?;
            let name = name.trim();
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            if !is_token(name) || value.is_empty() {
                return None;
            }
            let decoded = percent_decode(value, encoding_rs::UTF_8);
            let value = String::from_utf8_lossy(&decoded);
            mime_type = mime_type.with_parameter(name, &value);
        }
        Some(mime_type)
    }

    /// The default `text/plain;charset=US-ASCII`.
    pub fn default_text() -> Self {
        Self {
            essence: DEFAULT_MIME_TYPE.to_string(),
            parameters: vec![("charset".to_string(), DEFAULT_CHARSET.to_string())],
        }
    }

    /// Set a parameter, replacing one with the same name.
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match self.parameters.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.parameters.push((name, value.to_string())),
        }
        self
    }

    /// `type/subtype` in lowercase.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The value of the `charset` parameter.
    pub fn charset_label(&self) -> Option<&str> {
        self.parameter("charset")
    }

    fn is_default_text(&self) -> bool {
        self.essence == DEFAULT_MIME_TYPE
            && self.parameters.len() == 1
            && self.charset_label().is_some_and(|c| c.eq_ignore_ascii_case(DEFAULT_CHARSET))
    }

    /// The parameters as `;name=value...`, values percent-escaped where needed.
    pub fn parameters_as_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.parameters {
            out.push(';');
            out.push_str(name);
            out.push('=');
            percent_encode(value.as_bytes(), is_token_char, &mut out);
        }
        out
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.essence, self.parameters_as_string())
    }
}

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: MimeType,
    base64: bool,
    content: Vec<u8>,
    charset: &'static Encoding,
}

impl Default for DataUrl {
    fn default() -> Self {
        Self {
            mime_type: MimeType::default_text(),
            base64: false,
            content: Vec::new(),
            charset: WINDOWS_1252,
        }
    }
}

impl DataUrl {
    /// Create a data URL. The charset is taken from the MIME type, falling
    /// back to US-ASCII.
    pub fn new(mime_type: MimeType, base64: bool, content: Vec<u8>) -> Self {
        let charset = mime_type
            .charset_label()
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(WINDOWS_1252);
        Self {
            mime_type,
            base64,
            content,
            charset,
        }
    }

    /// Use `charset` for the content and record it in the MIME type.
    pub fn with_charset(mut self, charset: &'static Encoding) -> Self {
        self.mime_type = self.mime_type.with_parameter("charset", charset.name());
        self.charset = charset;
        self
    }

    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.base64
    }

    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    pub fn content_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// The payload decoded with the URL's charset.
    pub fn content_as_string(&self) -> String {
        self.charset.decode_without_bom_handling(&self.content).0.into_owned()
    }

    pub fn content_as_base64(&self) -> String {
        STANDARD.encode(&self.content)
    }

    /// Render the URL. The optimized form leaves out the default MIME type
    /// and the base64 marker of an empty payload.
    pub fn as_data_url_string(&self, optimized: bool) -> String {
        let mut out = String::from(DATA_URL_PREFIX);
        if !optimized {
            out.push_str(&self.mime_type.to_string());
        } else if !self.mime_type.is_default_text() {
            if self.mime_type.essence() == DEFAULT_MIME_TYPE {
                out.push_str(&self.mime_type.parameters_as_string());
            } else {
                out.push_str(&self.mime_type.to_string());
            }
        }

        if self.base64 && (!self.content.is_empty() || !optimized) {
            out.push_str(BASE64_MARKER);
        }
        out.push(',');
        if self.base64 {
            out.push_str(&self.content_as_base64());
        } else {
            percent_encode(
                &self.content,
                |c| c.is_ascii_graphic() && !"\"'()\\".contains(c),
                &mut out,
            );
        }
        out
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_data_url_string(false))
    }
}

impl CssWriteable for DataUrl {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        Ok(self.as_data_url_string(settings.is_optimized_output()))
    }
}

/// Find where the MIME type ends and whether a `;base64` marker ends it.
///
/// `;base64` followed by `=` before the comma is a parameter, not the marker.
fn split_header(rest: &str) -> (Option<usize>, bool) {
    let comma = rest.find(',');
    let mut search = 0;
    while let Some(index) = rest[search..].find(BASE64_MARKER).map(|i| i + search) {
        match comma {
            Some(comma) if index > comma => break,
            Some(comma) if rest[index..comma].contains('=') => {
                search = index + BASE64_MARKER.len();
            }
            _ => return (Some(index), true),
        }
    }
    (comma, false)
}

/// Parse a `data:` URL. Returns `None` if `url` is not a data URL, its MIME
/// type is malformed or its base64 payload cannot be decoded.
pub fn parse_data_url(url: &str) -> Option<DataUrl> {
    let url = url.trim();
    if !is_data_url(url) {
        return None;
    }
    let rest = &url[DATA_URL_PREFIX.len()..];
    if rest.trim().is_empty() {
        return Some(DataUrl::default());
    }

    let (mime_end, base64) = split_header(rest);
    let mime_text = mime_end.map(|end| rest[..end].trim()).filter(|m| !m.is_empty());
    let mime_type = match mime_text {
        None => MimeType::default_text(),
        Some(text) => {
            let text = if text.starts_with(';') {
                format!("{DEFAULT_MIME_TYPE}{text}")
            } else {
                text.to_string()
            };
            match MimeType::parse(&text) {
                Some(mime_type) => mime_type,
                None => {
                    tracing::warn!(mime_type = %text, "data URL contains an invalid MIME type");
                    return None;
                }
            }
        }
    };

    let charset = match mime_type.charset_label() {
        None => WINDOWS_1252,
        Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
            tracing::warn!(
                charset = label,
                "data URL declares an unknown charset, using {DEFAULT_CHARSET}"
            );
            WINDOWS_1252
        }),
    };

    let payload = rest.find(',').map(|comma| rest[comma + 1..].trim()).unwrap_or("");
    let mut content = percent_decode(payload, charset);
    if base64 {
        content.retain(|b| !b.is_ascii_whitespace());
        content = match STANDARD.decode(&content) {
            Ok(decoded) => decoded,
            Err(error) => {
                tracing::warn!(%error, "data URL contains an invalid base64 payload");
                return None;
            }
        };
    }

    Some(DataUrl {
        mime_type,
        base64,
        content,
        charset,
    })
}
