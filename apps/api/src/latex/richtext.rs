//! Rich-Text Normalizer — converts the WYSIWYG editor's constrained HTML
//! subset into LaTeX formatting commands.
//!
//! The editor (tiptap with a trimmed StarterKit) can only emit bold, italic,
//! underline, paragraph/div boundaries, line breaks, and list items. Rather
//! than fixed-point regex substitution over tag pairs, the input is parsed
//! into a small inline node tree and the tree is rendered once — nested and
//! adjacent tags fall out naturally and tag markers never reach the escaper.
//!
//! Output shapes:
//! - no `<li>` in the input → plain escaped text
//! - `<li>` present → each item prefixed with [`ITEM_SENTINEL`] for the
//!   bullet formatter to split on
//!
//! Malformed input is tolerated: unknown tags are dropped, stray closing
//! tags are ignored, unclosed tags are closed at end of input.

use crate::latex::escape::escape;

/// Delimiter marking a list-item boundary in normalized output.
///
/// U+001F (unit separator) cannot be typed in the editor and is not
/// Unicode whitespace, so it survives whitespace collapsing intact.
pub const ITEM_SENTINEL: char = '\u{1f}';

/// True if normalized text carries list-item boundaries.
pub fn has_items(normalized: &str) -> bool {
    normalized.contains(ITEM_SENTINEL)
}

/// Normalizes a rich-text fragment to LaTeX-safe inline text.
///
/// Input that already contains the item sentinel has been normalized once
/// before; it is returned as-is to avoid double escaping.
pub fn normalize(input: &str) -> String {
    if input.contains(ITEM_SENTINEL) {
        return input.trim().to_string();
    }
    let nodes = parse(input);
    let mut out = String::new();
    render_nodes(&nodes, &mut out);
    collapse_whitespace(&out)
}

// ────────────────────────────────────────────────────────────────────────────
// Inline node tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Bold,
    Italic,
    Underline,
    Item,
}

#[derive(Debug)]
enum Node {
    Text(String),
    Span(Mark, Vec<Node>),
    /// Block boundary (`<p>`, `<div>`, `<br>`) — flattens to a single space.
    Break,
}

#[derive(Debug)]
enum Token {
    Text(String),
    Open(Mark),
    Close(Mark),
    Break,
    /// Recognized but structurally irrelevant (`<ul>`, `<ol>`) or unknown.
    Dropped,
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenizer
// ────────────────────────────────────────────────────────────────────────────

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        let (text, tail) = rest.split_at(lt);
        if !text.is_empty() {
            tokens.push(Token::Text(decode_entities(text)));
        }
        match tail.find('>') {
            Some(gt) => {
                tokens.push(classify_tag(&tail[1..gt]));
                rest = &tail[gt + 1..];
            }
            None => {
                // No closing '>' — the remainder is literal text.
                tokens.push(Token::Text(decode_entities(tail)));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        tokens.push(Token::Text(decode_entities(rest)));
    }
    tokens
}

/// Classifies the inside of a `<...>` pair. Attributes are ignored.
fn classify_tag(body: &str) -> Token {
    let body = body.trim();
    let (closing, body) = match body.strip_prefix('/') {
        Some(b) => (true, b),
        None => (false, body),
    };
    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    let mark = match name.as_str() {
        "strong" | "b" => Some(Mark::Bold),
        "em" | "i" => Some(Mark::Italic),
        "u" => Some(Mark::Underline),
        "li" => Some(Mark::Item),
        "p" | "div" | "br" => return Token::Break,
        _ => None,
    };

    match (mark, closing) {
        (Some(m), false) => Token::Open(m),
        (Some(m), true) => Token::Close(m),
        (None, _) => Token::Dropped,
    }
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last so decoded ampersands cannot form new entities.
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

// ────────────────────────────────────────────────────────────────────────────
// Parser
// ────────────────────────────────────────────────────────────────────────────

fn parse(input: &str) -> Vec<Node> {
    let mut root: Vec<Node> = Vec::new();
    // Open spans; each frame collects children until its close tag arrives.
    let mut stack: Vec<(Mark, Vec<Node>)> = Vec::new();

    for token in tokenize(input) {
        match token {
            Token::Text(t) => attach(&mut stack, &mut root, Node::Text(t)),
            Token::Break => attach(&mut stack, &mut root, Node::Break),
            Token::Open(mark) => stack.push((mark, Vec::new())),
            Token::Close(mark) => {
                if stack.iter().any(|(m, _)| *m == mark) {
                    // Auto-close anything the stray nesting left open above it.
                    loop {
                        let (m, children) = stack.pop().unwrap_or((mark, Vec::new()));
                        attach(&mut stack, &mut root, Node::Span(m, children));
                        if m == mark {
                            break;
                        }
                    }
                }
                // Close without a matching open: ignored.
            }
            Token::Dropped => {}
        }
    }

    // Unclosed tags at end of input.
    while let Some((mark, children)) = stack.pop() {
        attach(&mut stack, &mut root, Node::Span(mark, children));
    }

    root
}

/// Appends a node to the innermost open span, or to the root when none is open.
fn attach(stack: &mut [(Mark, Vec<Node>)], root: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some((_, children)) => children.push(node),
        None => root.push(node),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

fn render_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Break => out.push(' '),
            Node::Span(Mark::Item, children) => {
                out.push(ITEM_SENTINEL);
                render_nodes(children, out);
            }
            Node::Span(mark, children) => {
                let command = match mark {
                    Mark::Bold => "\\textbf{",
                    Mark::Italic => "\\textit{",
                    Mark::Underline => "\\myuline{",
                    Mark::Item => unreachable!(),
                };
                out.push_str(command);
                render_nodes(children, out);
                out.push('}');
            }
        }
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
