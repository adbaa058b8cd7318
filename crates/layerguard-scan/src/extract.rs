//! Import extraction: a line scanner, not a JavaScript parser.
//!
//! Recognized forms:
//! - `import defaultExport, { named } from "spec"`
//! - `import "spec"` (side-effect import)
//! - `export ... from "spec"`
//! - `require("spec")`
//! - `import("spec")` (dynamic import)
//!
//! `//` and `/* ... */` comments are masked with string-literal awareness,
//! so specifiers containing `//` survive and commented-out imports are not
//! reported. Multi-line statements are caught on the line carrying
//! `from "spec"`.

/// One extracted specifier with its 1-based source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImport {
    pub specifier: String,
    pub line: u32,
    /// Column of the first character of the specifier.
    pub col: u32,
}

pub fn scan_imports(source: &str) -> Vec<RawImport> {
    let mut out = Vec::new();
    let mut in_block = false;
    for (idx, raw) in source.lines().enumerate() {
        let line_no = (idx + 1) as u32;
        let (line, still_in_block) = mask_comments(raw, in_block);
        in_block = still_in_block;
        let line = line.as_str();

        let mut found: Vec<RawImport> = Vec::new();
        collect_call_form(line, "require", line_no, &mut found);
        collect_call_form(line, "import", line_no, &mut found);
        collect_from_form(line, line_no, &mut found);
        collect_side_effect_form(line, line_no, &mut found);

        found.sort_by_key(|i| i.col);
        out.extend(found);
    }
    out
}

/// `require("spec")` / `import("spec")`.
fn collect_call_form(line: &str, keyword: &str, line_no: u32, out: &mut Vec<RawImport>) {
    for (pos, _) in line.match_indices(keyword) {
        if !boundary_before(line, pos) {
            continue;
        }
        let mut i = skip_ws(line, pos + keyword.len());
        if line.as_bytes().get(i) != Some(&b'(') {
            continue;
        }
        i = skip_ws(line, i + 1);
        push_quoted(line, i, line_no, out);
    }
}

/// `... from "spec"`.
fn collect_from_form(line: &str, line_no: u32, out: &mut Vec<RawImport>) {
    for (pos, _) in line.match_indices("from") {
        if !boundary_before(line, pos) || !boundary_after(line, pos + 4) {
            continue;
        }
        let i = skip_ws(line, pos + 4);
        push_quoted(line, i, line_no, out);
    }
}

/// `import "spec"`.
fn collect_side_effect_form(line: &str, line_no: u32, out: &mut Vec<RawImport>) {
    for (pos, _) in line.match_indices("import") {
        if !boundary_before(line, pos) {
            continue;
        }
        let i = skip_ws(line, pos + 6);
        push_quoted(line, i, line_no, out);
    }
}

/// Read a quoted specifier starting at byte `i`; push it with its position.
fn push_quoted(line: &str, i: usize, line_no: u32, out: &mut Vec<RawImport>) {
    let bytes = line.as_bytes();
    let quote = match bytes.get(i).copied() {
        Some(q @ (b'\'' | b'"' | b'`')) => q,
        _ => return,
    };
    let Some(len) = bytes[i + 1..].iter().position(|&b| b == quote) else {
        return;
    };
    out.push(RawImport {
        specifier: line[i + 1..i + 1 + len].to_string(),
        line: line_no,
        col: (i + 2) as u32,
    });
}

fn boundary_before(line: &str, pos: usize) -> bool {
    if pos == 0 {
        return true;
    }
    !is_ident_byte(line.as_bytes()[pos - 1])
}

fn boundary_after(line: &str, pos: usize) -> bool {
    match line.as_bytes().get(pos) {
        Some(&b) => !is_ident_byte(b),
        None => true,
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'.'
}

fn skip_ws(line: &str, mut i: usize) -> usize {
    let bytes = line.as_bytes();
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    i
}

/// Overwrite `//` and `/* ... */` comment bytes with spaces, tracking string
/// literals so specifiers containing `//` survive.
///
/// Masking (rather than cutting) keeps byte columns stable for position
/// reporting. Returns whether a block comment is still open at end of line.
fn mask_comments(line: &str, starts_in_block: bool) -> (String, bool) {
    let bytes = line.as_bytes();
    let mut out = bytes.to_vec();
    let mut in_block = starts_in_block;
    let mut in_quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        if in_block {
            out[i] = b' ';
            if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                out[i + 1] = b' ';
                in_block = false;
                i += 2;
                continue;
            }
            i += 1;
            continue;
        }
        match in_quote {
            Some(q) => {
                if bytes[i] == b'\\' {
                    i += 1;
                } else if bytes[i] == q {
                    in_quote = None;
                }
            }
            None => match bytes[i] {
                b'\'' | b'"' | b'`' => in_quote = Some(bytes[i]),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    for b in &mut out[i..] {
                        *b = b' ';
                    }
                    break;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    in_block = true;
                    i += 2;
                    continue;
                }
                _ => {}
            },
        }
        i += 1;
    }
    // Masked regions always cover whole characters, so the result stays
    // valid UTF-8; from_utf8_lossy is a straight copy here.
    (String::from_utf8_lossy(&out).into_owned(), in_block)
}
