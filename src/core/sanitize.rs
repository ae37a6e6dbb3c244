// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` once decoded) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Turn free text (a URL segment, a page title) into a safe file stem.
/// Runs of whitespace and separators become a single `_`; other punctuation is dropped.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '/' || ch == '\\' { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Last non-empty path segment of a URL, without query or fragment.
/// `https://fbref.com/en/comps/9/stats/Premier-League-Stats?x=1` → `Premier-League-Stats`
pub fn url_last_segment(url: &str) -> Option<&str> {
    let no_frag = url.split('#').next().unwrap_or(url);
    let path = no_frag.split('?').next().unwrap_or(no_frag);
    let path = path.split_once("://").map(|(_, rest)| rest).unwrap_or(path);
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    // first segment is the host
    segments.next()?;
    segments.last()
}
