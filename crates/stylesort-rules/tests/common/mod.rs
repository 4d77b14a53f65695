//! Test fixtures: a tiny scanner that builds the host-side inputs for a
//! snippet containing one trigger comment and (usually) one style object.
//!
//! The real host owns parsing; this scanner only understands the handful
//! of shapes the fixtures use: a leading comment, an optional
//! `const x =` declaration, an optional `satisfies T` wrapper, and an
//! object literal with string- and bracket-aware member splitting.

use stylesort_core::tree::{
    Declarator, Member, MemberKind, Node, ObjectLiteral, SatisfiesExpression, SyntaxTree,
    VariableDeclaration,
};
use stylesort_core::{apply_edits, Comment, Diagnostic, Span};
use stylesort_rules::CommandRegistry;

pub struct Fixture {
    pub source: String,
    pub comment: Comment,
    pub tree: SyntaxTree,
}

pub fn fixture(source: &str) -> Fixture {
    let comment = scan_comment(source);
    let tree = scan_tree(source, comment.span.end);
    Fixture {
        source: source.to_string(),
        comment,
        tree,
    }
}

/// Run the registry over the fixture's comment
pub fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
    let fixture = fixture(source);
    CommandRegistry::new().run_matched(&fixture.source, &fixture.tree, &fixture.comment)
}

/// Expect exactly one fixable diagnostic and apply its fix
pub fn fixed(source: &str) -> String {
    let diagnostics = diagnostics_for(source);
    assert_eq!(diagnostics.len(), 1, "expected one diagnostic");
    let fix = diagnostics[0].fix.clone().expect("expected a fix");
    apply_edits(source, &[fix]).unwrap()
}

fn scan_comment(source: &str) -> Comment {
    let line = source.find("//").map(|at| (at, true));
    let block = source.find("/*").map(|at| (at, false));
    let (at, is_line) = [line, block]
        .into_iter()
        .flatten()
        .min_by_key(|(at, _)| *at)
        .expect("fixture has no comment");

    if is_line {
        let end = source[at..].find('\n').map_or(source.len(), |n| at + n);
        Comment::line(&source[at + 2..end], Span::new(at, end))
    } else {
        let close = at + source[at..].find("*/").expect("unterminated block comment");
        Comment::block(&source[at + 2..close], Span::new(at, close + 2))
    }
}

fn scan_tree(source: &str, from: usize) -> SyntaxTree {
    let at = skip_trivia(source, from, source.len());
    if at >= source.len() {
        return SyntaxTree::default();
    }
    let rest = &source[at..];

    if let Some(keyword) = ["const ", "let ", "var "]
        .iter()
        .find(|k| rest.starts_with(*k))
    {
        let Some(eq) = rest.find('=') else {
            return SyntaxTree::default();
        };
        let init_at = skip_trivia(source, at + eq + 1, source.len());
        let (init, init_end) = if source.as_bytes().get(init_at) == Some(&b'{') {
            let (node, end) = scan_object_node(source, init_at);
            (Some(node), end)
        } else {
            let end = source[init_at..]
                .find([';', '\n'])
                .map_or(source.len(), |n| init_at + n);
            (None, end)
        };
        let decl_end = source[init_end..]
            .find(';')
            .map_or(source.len(), |n| init_end + n + 1);
        let declarator = Declarator {
            span: Span::new(at + keyword.len(), init_end),
            init,
        };
        return SyntaxTree::new(vec![Node::VarDecl(VariableDeclaration {
            span: Span::new(at, decl_end),
            declarators: vec![declarator],
        })]);
    }

    if rest.starts_with('{') {
        let (node, _) = scan_object_node(source, at);
        return SyntaxTree::new(vec![node]);
    }

    SyntaxTree::default()
}

/// Parse an object literal at `open`, wrapping it when a `satisfies T`
/// assertion follows.
fn scan_object_node(source: &str, open: usize) -> (Node, usize) {
    let object = scan_object(source, open);
    let close_end = object.close_brace.end;

    let after = skip_trivia(source, close_end, source.len());
    if source[after..].starts_with("satisfies ") {
        let type_at = skip_trivia(source, after + "satisfies ".len(), source.len());
        let type_len = source[type_at..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
            .count();
        let end = type_at + type_len;
        let node = Node::Satisfies(SatisfiesExpression {
            span: Span::new(open, end),
            inner: Box::new(Node::Object(object)),
        });
        return (node, end);
    }

    (Node::Object(object), close_end)
}

fn scan_object(source: &str, open: usize) -> ObjectLiteral {
    let close = matching_brace(source, open);
    let mut members = Vec::new();

    let mut at = open + 1;
    while at < close {
        let (seg_end, comma) = member_boundary(source, at, close);

        let start = skip_trivia(source, at, seg_end);
        if start < seg_end {
            let end = start + source[start..seg_end].trim_end().len();
            if end > start {
                members.push(Member {
                    span: Span::new(start, end),
                    comma: comma.map(|c| Span::new(c, c + 1)),
                    kind: classify_member(&source[start..end]),
                });
            }
        }

        at = match comma {
            Some(c) => c + 1,
            None => seg_end,
        };
    }

    ObjectLiteral {
        span: Span::new(open, close + 1),
        open_brace: Span::new(open, open + 1),
        close_brace: Span::new(close, close + 1),
        members,
    }
}

/// Find the end of the member starting at `at`: the next top-level comma,
/// or the closing brace.
fn member_boundary(source: &str, at: usize, close: usize) -> (usize, Option<usize>) {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = at;
    while i < close {
        match bytes[i] {
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => depth -= 1,
            b'\'' | b'"' | b'`' => i = skip_string(source, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < close && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = source[i..].find("*/").map_or(close, |n| i + n + 1);
            }
            b',' if depth == 0 => return (i, Some(i)),
            _ => {}
        }
        i += 1;
    }
    (close, None)
}

fn classify_member(text: &str) -> MemberKind {
    if text.starts_with("...") {
        return MemberKind::Spread;
    }
    if text.starts_with('[') {
        return MemberKind::Other;
    }
    if let Some(quote) = text.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let body = &text[1..];
        if let Some(end) = body.find(quote) {
            if body[end + 1..].trim_start().starts_with(':') {
                return MemberKind::LiteralKey(text[..end + 2].to_string());
            }
        }
        return MemberKind::Other;
    }
    let ident_len = text
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .count();
    if ident_len > 0 && text[ident_len..].trim_start().starts_with(':') {
        return MemberKind::IdentifierKey(text[..ident_len].to_string());
    }
    MemberKind::Other
}

fn matching_brace(source: &str, open: usize) -> usize {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < source.len() {
        match bytes[i] {
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            b'\'' | b'"' | b'`' => i = skip_string(source, i),
            _ => {}
        }
        i += 1;
    }
    panic!("unbalanced braces in fixture");
}

fn skip_string(source: &str, at: usize) -> usize {
    let bytes = source.as_bytes();
    let quote = bytes[at];
    let mut i = at + 1;
    while i < bytes.len() && bytes[i] != quote {
        if bytes[i] == b'\\' {
            i += 1;
        }
        i += 1;
    }
    i
}

fn skip_trivia(source: &str, mut at: usize, end: usize) -> usize {
    let bytes = source.as_bytes();
    loop {
        while at < end && bytes[at].is_ascii_whitespace() {
            at += 1;
        }
        if at + 1 < end && bytes[at] == b'/' && bytes[at + 1] == b'/' {
            while at < end && bytes[at] != b'\n' {
                at += 1;
            }
        } else if at + 1 < end && bytes[at] == b'/' && bytes[at + 1] == b'*' {
            at = source[at..].find("*/").map_or(end, |n| at + n + 2);
        } else {
            return at;
        }
    }
}
