//! Small builders for spreadsheet expression text.
//!
//! Formulas are plain strings. The only transformation applied is
//! [`qualify`], which adds the `_xlpm.` prefix the file format requires on
//! `LET` and `LAMBDA` parameter names.

/// Prefix the file format stores on `LET`/`LAMBDA` parameter names.
pub const PARAM_PREFIX: &str = "_xlpm.";

/// A `LET(name, value, ..., body)` expression under construction.
#[derive(Debug, Clone, Default)]
pub struct Let {
    bindings: Vec<(&'static str, String)>,
}

impl Let {
    /// Starts an empty `LET`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding. Later bindings may refer to earlier ones.
    #[must_use]
    pub fn bind(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.bindings.push((name, value.into()));
        self
    }

    /// Closes the `LET` with its calculation.
    #[must_use]
    pub fn body(self, body: impl AsRef<str>) -> String {
        let names: Vec<&str> = self.bindings.iter().map(|(name, _)| *name).collect();
        let mut out = String::from("LET(");
        for (name, value) in &self.bindings {
            out.push_str(PARAM_PREFIX);
            out.push_str(name);
            out.push(',');
            out.push_str(&qualify(value, &names));
            out.push(',');
        }
        out.push_str(&qualify(body.as_ref(), &names));
        out.push(')');
        out
    }
}

/// `LAMBDA(p1, ..., body)` with its parameters qualified.
#[must_use]
pub fn lambda(params: &[&str], body: &str) -> String {
    let mut out = String::from("LAMBDA(");
    for param in params {
        out.push_str(PARAM_PREFIX);
        out.push_str(param);
        out.push(',');
    }
    out.push_str(&qualify(body, params));
    out.push(')');
    out
}

/// Blank when any cell is empty, otherwise `expr`.
#[must_use]
pub fn if_any_blank(cells: &[&str], expr: &str) -> String {
    let tests: Vec<String> = cells.iter().map(|c| format!("{c}=\"\"")).collect();
    format!("IF(OR({}),\"\",{})", tests.join(","), expr)
}

/// `expr`, or blank when it evaluates to an error.
#[must_use]
pub fn iferror_blank(expr: &str) -> String {
    format!("IFERROR({expr},\"\")")
}

/// Prefixes bare occurrences of `names` with [`PARAM_PREFIX`].
///
/// String literals are copied untouched. An identifier is left alone when
/// it is called as a function, is part of a sheet or structured reference,
/// or is an absolute cell reference.
#[must_use]
pub fn qualify(expr: &str, names: &[&str]) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + names.len() * PARAM_PREFIX.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            // A doubled quote closes and reopens, which needs no special case.
            in_string = c != '"';
            out.push(c);
            i += 1;
            continue;
        }
        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }
        if !is_ident_start(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_ident_char(chars[i]) {
            i += 1;
        }
        let token: String = chars[start..i].iter().collect();
        let before = start.checked_sub(1).map(|p| chars[p]);
        let after = chars.get(i).copied();
        let is_reference = matches!(before, Some('!' | '$' | '['))
            || matches!(after, Some('(' | '!' | '['));

        if !is_reference && names.contains(&token.as_str()) {
            out.push_str(PARAM_PREFIX);
        }
        out.push_str(&token);
    }
    out
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Whether parentheses balance outside string literals.
#[must_use]
pub fn is_balanced(expr: &str) -> bool {
    let mut depth: i64 = 0;
    let mut in_string = false;
    for c in expr.chars() {
        match c {
            '"' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && !in_string
}
