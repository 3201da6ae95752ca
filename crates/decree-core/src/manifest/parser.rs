//! Manifest text parsing: tokenization and source annotation scoping

use crate::error::{Error, Result};

/// One parsed manifest declaration: a package identifier and the name of
/// the source that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub package: String,
    pub source: String,
}

/// Parse one manifest's text into entries.
///
/// Source resolution, most specific first:
/// 1. a temporary annotation `(name)` applies to exactly the next package
/// 2. a current annotation `[name]` applies until the next `[name]`
/// 3. otherwise `default_source`
///
/// A package with none of the three is an error, as are two adjacent
/// temporary annotations and a temporary annotation with no package
/// after it.
pub fn parse_manifest(text: &str, default_source: Option<&str>) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    let mut temporary: Option<String> = None;
    let mut current: Option<String> = None;

    for token in tokenize(text) {
        if let Some(name) = enclosed(&token, '(', ')') {
            let name = name.to_string();
            if name.is_empty() {
                return Err(Error::EmptyAnnotation { token });
            }
            if let Some(first) = temporary {
                return Err(Error::AdjacentTemporaries {
                    first,
                    second: name,
                });
            }
            temporary = Some(name);
        } else if let Some(name) = enclosed(&token, '[', ']') {
            let name = name.to_string();
            if name.is_empty() {
                return Err(Error::EmptyAnnotation { token });
            }
            current = Some(name);
        } else {
            let source = match temporary.take().or_else(|| current.clone()) {
                Some(source) => source,
                None => match default_source {
                    Some(source) => source.to_string(),
                    None => return Err(Error::no_source_for_package(token)),
                },
            };
            entries.push(ManifestEntry {
                package: token,
                source,
            });
        }
    }

    if let Some(source) = temporary {
        return Err(Error::DanglingTemporary { source_name: source });
    }

    Ok(entries)
}

/// The inner text of `token` when it is wrapped in `open`..`close`.
fn enclosed(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

/// Split manifest text into tokens.
///
/// Whitespace and double quotes delimit tokens. An unescaped `#` starts
/// a comment running to end of line; `\#` is a literal `#`.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    let mut in_comment = false;

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
            continue;
        }
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                chars.next();
                current.push('#');
            }
            '#' => {
                flush(&mut tokens, &mut current);
                in_comment = true;
            }
            ' ' | '\t' | '\r' | '\n' | '"' => flush(&mut tokens, &mut current),
            _ => current.push(c),
        }
    }
    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
