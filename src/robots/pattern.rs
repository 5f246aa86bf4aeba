/// Path-rule matching. Patterns are matched against the raw request path,
/// case-sensitively and without percent-decoding. `*` matches any character
/// sequence (including empty) and a trailing `$` anchors the pattern to the
/// end of the path. An empty pattern never matches: `Disallow:` with no value
/// classically means nothing is disallowed.
pub fn matches(pattern: &str, path: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let (body, anchored) = match pattern.strip_suffix('$') {
        Some(stripped) => (stripped, true),
        None => (pattern, false),
    };

    let parts: Vec<&str> = body.split('*').collect();
    let first = parts[0];
    if !path.starts_with(first) {
        return false;
    }
    if parts.len() == 1 {
        // No wildcard at all: plain prefix match, exact match when anchored.
        return !anchored || path.len() == first.len();
    }

    let mut pos = first.len();
    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        match path[pos..].find(part) {
            Some(offset) => pos += offset + part.len(),
            None => return false,
        }
    }

    let last = parts[parts.len() - 1];
    if anchored {
        path.len() >= pos + last.len() && path.ends_with(last)
    } else {
        last.is_empty() || path[pos..].contains(last)
    }
}

/// The number of literal (non-wildcard) characters in a pattern. Used for
/// longest-match-wins precedence between rules that both match a path.
pub fn specificity(pattern: &str) -> usize {
    let body = pattern.strip_suffix('$').unwrap_or(pattern);
    body.chars().filter(|c| *c != '*').count()
}
