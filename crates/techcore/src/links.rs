//! Marketplace search links for product cards.

/// Search endpoint; the encoded title is appended as the final path segment.
pub const MARKETPLACE_SEARCH_BASE: &str = "https://lista.mercadolivre.com.br/";

/// `MARKETPLACE_SEARCH_BASE` + title, percent-encoded like `encodeURIComponent`.
pub fn marketplace_search_url(title: &str) -> String {
    let mut url = String::with_capacity(MARKETPLACE_SEARCH_BASE.len() + title.len() * 3);
    url.push_str(MARKETPLACE_SEARCH_BASE);
    url.push_str(&encode_uri_component(title));
    url
}

/// Percent-encode every UTF-8 byte outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
