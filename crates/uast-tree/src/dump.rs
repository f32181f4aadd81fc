use crate::Node;

pub(crate) fn dump(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let kinds = node.kinds.iter().map(|kind| kind.as_str()).collect::<Vec<_>>().join(",");
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("[{kinds}]"));

    if !node.native_node.is_empty() {
        out.push(' ');
        out.push_str(&node.native_node);
    }
    if let Some(token) = &node.token {
        out.push_str(&format!(" {:?} {}:{}", token.value, token.line, token.column));
    }
    out.push('\n');

    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
