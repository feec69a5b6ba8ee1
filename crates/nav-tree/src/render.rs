use crate::traits::TreeNode;

/// Render a forest as indented text
///
/// Roots start at column 0; descendants hang off `├── ` and `└── `
/// connectors. Each line shows [`TreeNode::label`].
pub fn render_forest<T: TreeNode>(forest: &[T]) -> String {
    let mut out = String::new();
    // (node, prefix of its own line, prefix handed to its children)
    let mut stack: Vec<(&T, String, String)> = forest
        .iter()
        .rev()
        .map(|node| (node, String::new(), String::new()))
        .collect();

    while let Some((node, prefix, children_prefix)) = stack.pop() {
        out.push_str(&prefix);
        out.push_str(node.label());
        out.push('\n');

        let children = node.children();
        for (index, child) in children.iter().enumerate().rev() {
            let (branch, continuation) = if index + 1 == children.len() {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            stack.push((
                child,
                format!("{children_prefix}{branch}"),
                format!("{children_prefix}{continuation}"),
            ));
        }
    }

    out
}
