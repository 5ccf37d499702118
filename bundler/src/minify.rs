//! Conservative Minification
//!
//! Pure-Rust minifiers for the production build: comments outside string
//! literals are stripped, then grammar-insignificant whitespace is
//! collapsed. Both passes err on the side of leaving input unchanged; the
//! output must stay functionally equivalent, never smaller at the cost of
//! correctness. There is no identifier shortening and no dead-branch
//! elimination.

/// Scanner state shared by the comment strippers.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan {
    Code,
    Quoted { quote: char, escaped: bool },
    SlashSeen,
    LineComment,
    BlockComment { closing: bool },
}

/// Minify a JavaScript source string.
pub fn minify_js(source: &str) -> String {
    squeeze_whitespace(&strip_comments(source, true), true)
}

/// Minify a CSS source string.
pub fn minify_css(source: &str) -> String {
    squeeze_whitespace(&strip_comments(source, false), false)
}

fn starts_string(ch: char, js: bool) -> bool {
    ch == '"' || ch == '\'' || (js && ch == '`')
}

/// Drop `/* */` comments, and `//` line comments when minifying
/// JavaScript, without touching string or template-literal contents.
fn strip_comments(source: &str, js: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = Scan::Code;

    // A slash is held back until the next character shows whether it opened
    // a comment; division and regex literals keep their slash this way.
    fn from_code(ch: char, js: bool, out: &mut String) -> Scan {
        if starts_string(ch, js) {
            out.push(ch);
            return Scan::Quoted {
                quote: ch,
                escaped: false,
            };
        }
        if ch == '/' {
            return Scan::SlashSeen;
        }
        out.push(ch);
        Scan::Code
    }

    for ch in source.chars() {
        state = match state {
            Scan::Code => from_code(ch, js, &mut out),
            Scan::SlashSeen => match ch {
                '*' => Scan::BlockComment { closing: false },
                '/' if js => Scan::LineComment,
                _ => {
                    out.push('/');
                    from_code(ch, js, &mut out)
                }
            },
            Scan::Quoted { quote, escaped } => {
                out.push(ch);
                if escaped {
                    Scan::Quoted {
                        quote,
                        escaped: false,
                    }
                } else if ch == '\\' {
                    Scan::Quoted {
                        quote,
                        escaped: true,
                    }
                } else if ch == quote {
                    Scan::Code
                } else {
                    Scan::Quoted {
                        quote,
                        escaped: false,
                    }
                }
            }
            Scan::LineComment => {
                if ch == '\n' || ch == '\r' {
                    out.push(ch);
                    Scan::Code
                } else {
                    Scan::LineComment
                }
            }
            Scan::BlockComment { closing } => {
                if closing && ch == '/' {
                    Scan::Code
                } else {
                    Scan::BlockComment { closing: ch == '*' }
                }
            }
        };
    }

    if state == Scan::SlashSeen {
        out.push('/');
    }

    out
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Replace each whitespace run with a single space where the grammar needs
/// a separator, or nothing where it does not. String contents pass through
/// untouched.
fn squeeze_whitespace(source: &str, js: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut quoted: Option<char> = None;
    let mut escaped = false;
    let mut gap = false;

    for ch in source.chars() {
        if let Some(quote) = quoted {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                quoted = None;
            }
            continue;
        }

        if ch.is_whitespace() {
            gap = true;
            continue;
        }

        if gap {
            emit_separator(&mut out, ch, js);
            gap = false;
        }

        if starts_string(ch, js) {
            quoted = Some(ch);
        }
        out.push(ch);
    }

    out
}

/// Decide whether the pending whitespace gap needs to survive as one space.
fn emit_separator(out: &mut String, next: char, js: bool) {
    let Some(prev) = out.chars().last() else {
        return;
    };

    if js {
        // `a + ++b` must not fuse into `a+++b`
        if (prev == '+' && next == '+') || (prev == '-' && next == '-') {
            out.push(' ');
            return;
        }
        if is_ident_char(prev) && is_ident_char(next) {
            out.push(' ');
        }
    } else {
        // Space is insignificant next to these; anywhere else it may be a
        // descendant combinator or value separator, so keep it.
        const CSS_GLUE: &[char] = &['{', '}', ';', ':', ','];
        if !CSS_GLUE.contains(&prev) && !CSS_GLUE.contains(&next) {
            out.push(' ');
        }
    }
}
