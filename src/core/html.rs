// src/core/html.rs
// Tolerant markup reader for card walls.
// Hand-scanned like any page we read: case-insensitive tag/attribute names,
// quote-aware tag ends, no failure modes. Broken input degrades into text
// or auto-closed elements instead of an error.

use crate::dom::{Element, Node};
use super::sanitize::normalize_entities;

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID.contains(&tag)
}

/// Elements whose content is not markup.
pub fn is_raw_text(tag: &str) -> bool {
    tag == "script" || tag == "style"
}

/// Parse an HTML document or fragment into a node list.
pub fn parse_fragment(src: &str) -> Vec<Node> {
    let bytes = src.as_bytes();
    let n = bytes.len();
    let mut i = 0usize;

    // stack[0] is a synthetic root collecting top-level nodes
    let mut stack: Vec<Element> = vec![Element::new("#root")];

    while i < n {
        let lt = match find_byte(bytes, i, b'<') {
            Some(p) => p,
            None => {
                push_text(&mut stack, &src[i..]);
                break;
            }
        };
        if lt > i {
            push_text(&mut stack, &src[i..lt]);
        }

        let rest = &src[lt..];

        // <!-- comment -->
        if rest.starts_with("<!--") {
            i = match rest[4..].find("-->") {
                Some(end) => lt + 4 + end + 3,
                None => n,
            };
            continue;
        }

        // <!DOCTYPE …> / <?xml …?>
        if rest.starts_with("<!") || rest.starts_with("<?") {
            i = find_byte(bytes, lt, b'>').map(|p| p + 1).unwrap_or(n);
            continue;
        }

        // A '<' that does not start a tag is just text
        let next = bytes.get(lt + 1).copied().unwrap_or(b' ');
        if !(next.is_ascii_alphabetic() || next == b'/') {
            push_text(&mut stack, "<");
            i = lt + 1;
            continue;
        }

        let gt = match find_tag_end(bytes, lt + 1) {
            Some(p) => p,
            None => {
                push_text(&mut stack, rest);
                break;
            }
        };
        let tag_text = src[lt + 1..gt].trim();
        i = gt + 1;

        // ----- closing tag -----
        if let Some(name) = tag_text.strip_prefix('/') {
            let name = name.trim().to_ascii_lowercase();
            close_element(&mut stack, &name);
            continue;
        }

        // ----- opening tag -----
        let (el, self_closing) = parse_open_tag(tag_text);
        let tag = el.tag.clone();

        if is_void(&tag) || self_closing {
            append(&mut stack, Node::Element(el));
            continue;
        }

        if is_raw_text(&tag) {
            // Everything up to the matching close tag is text
            let close = join_close(&tag);
            let lc = src[i..].to_ascii_lowercase();
            let end = lc.find(&close).map(|p| i + p).unwrap_or(n);
            let mut el = el;
            if end > i {
                el.children.push(Node::Text(s!(&src[i..end])));
            }
            append(&mut stack, Node::Element(el));
            i = find_byte(bytes, end, b'>').map(|p| p + 1).unwrap_or(n);
            continue;
        }

        close_implied(&mut stack, &tag);
        stack.push(el);
    }

    // Auto-close anything left open
    while stack.len() > 1 {
        if let Some(el) = stack.pop() {
            append(&mut stack, Node::Element(el));
        }
    }
    stack.pop().map(|root| root.children).unwrap_or_default()
}

fn join_close(tag: &str) -> String {
    let mut s = s!("</");
    s.push_str(tag);
    s
}

fn find_byte(bytes: &[u8], from: usize, ch: u8) -> Option<usize> {
    bytes.get(from..)?.iter().position(|&c| c == ch).map(|off| from + off)
}

/// Position of the '>' closing a tag opened before `from`, skipping quoted values.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut in_s = false; // '
    let mut in_d = false; // "
    for (off, &c) in bytes.get(from..)?.iter().enumerate() {
        match c {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(from + off),
            _ => {}
        }
    }
    None
}

fn push_text(stack: &mut [Element], text: &str) {
    if text.is_empty() {
        return;
    }
    let decoded = normalize_entities(text);
    if let Some(top) = stack.last_mut() {
        // Merge with a preceding text node (e.g. after a stray '<')
        if let Some(Node::Text(prev)) = top.children.last_mut() {
            prev.push_str(&decoded);
            return;
        }
        top.children.push(Node::Text(decoded));
    }
}

fn append(stack: &mut [Element], node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

/// Pop up to and including the nearest open `name`. Stray closers are ignored.
fn close_element(stack: &mut Vec<Element>, name: &str) {
    let Some(pos) = stack.iter().rposition(|el| el.tag == name) else {
        return;
    };
    pop_to(stack, pos);
}

fn pop_to(stack: &mut Vec<Element>, pos: usize) {
    if pos == 0 {
        return; // never close the synthetic root
    }
    while stack.len() > pos {
        if let Some(el) = stack.pop() {
            append(stack, Node::Element(el));
        }
    }
}

/// Optional end tags: which open elements a new `tag` closes, and which
/// open elements stop the search (a nested list keeps its outer `li`).
fn implied_end(tag: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match tag {
        "li" => Some((&["li"], &["ul", "ol", "menu"])),
        "p" => Some((&["p"], &["div", "section", "article", "li", "td", "th", "body"])),
        "tr" => Some((&["tr", "td", "th"], &["table", "thead", "tbody", "tfoot"])),
        "td" | "th" => Some((&["td", "th"], &["tr", "table"])),
        "option" => Some((&["option"], &["select", "datalist", "optgroup"])),
        _ => None,
    }
}

/// Close what an opening `tag` implicitly ends: `<li>a<li>b` is two items.
fn close_implied(stack: &mut Vec<Element>, tag: &str) {
    let Some((closes, scope)) = implied_end(tag) else {
        return;
    };
    let mut hit = None;
    for (pos, el) in stack.iter().enumerate().skip(1).rev() {
        if scope.contains(&el.tag.as_str()) {
            break;
        }
        if closes.contains(&el.tag.as_str()) {
            hit = Some(pos);
        }
    }
    if let Some(pos) = hit {
        pop_to(stack, pos);
    }
}

/// Parse `tag attr="v" attr2='v' bare attr3=v /` (text between '<' and '>').
fn parse_open_tag(text: &str) -> (Element, bool) {
    let self_closing = text.ends_with('/');
    let text = text.trim_end_matches('/');

    let name_end = text
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(text.len());
    let mut el = Element::new(&text[..name_end]);

    let bytes = text.as_bytes();
    let n = bytes.len();
    let mut i = name_end;

    while i < n {
        // skip whitespace
        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }
        if i >= n { break; }

        // attribute name
        let start = i;
        while i < n && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' { i += 1; }
        let name = text[start..i].to_ascii_lowercase();
        if name.is_empty() {
            i += 1;
            continue;
        }

        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }

        // bare attribute
        if i >= n || bytes[i] != b'=' {
            el.set_attr(name, s!());
            continue;
        }
        i += 1; // '='
        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }

        let value = match bytes.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let vstart = i + 1;
                let vend = find_byte(bytes, vstart, q).unwrap_or(n);
                i = (vend + 1).min(n);
                &text[vstart..vend]
            }
            _ => {
                let vstart = i;
                while i < n && !bytes[i].is_ascii_whitespace() { i += 1; }
                &text[vstart..i]
            }
        };
        el.set_attr(name, normalize_entities(value));
    }

    (el, self_closing)
}
