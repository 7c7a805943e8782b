// Shallow structural parse over the token stream: loops, function headers and
// call sites. Not a real syntax tree; bodies are found by brace counting, or by
// a fixed token window for indentation-based code.

use bigo_core::LanguageBucket;

/// Number of tokens taken as a loop body when the language has no braces.
/// Low fidelity on purpose: indentation is not tracked.
pub const PYTHON_LOOP_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Loop,
    Function,
    Call,
    Block,
    Assignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub kind: NodeKind,
    /// Matched token text: the loop keyword, the function name, the call paren.
    pub content: String,
    pub children: Vec<AstNode>,
    /// Nesting depth at creation time, 0-based.
    pub depth: usize,
}

impl AstNode {
    fn leaf(kind: NodeKind, content: &str, depth: usize) -> Self {
        Self {
            kind,
            content: content.to_string(),
            children: Vec::new(),
            depth,
        }
    }

    pub fn is_loop(&self) -> bool {
        self.kind == NodeKind::Loop
    }
}

// Iterative teardown; the derived drop recurses once per nesting level.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

fn function_keyword(bucket: LanguageBucket) -> &'static str {
    match bucket {
        LanguageBucket::Python => "def",
        LanguageBucket::Go => "func",
        _ => "function",
    }
}

const NON_CALL_PREFIXES: [&str; 5] = ["for", "while", "if", "def", "func"];

/// Build the top-level node list. Unbalanced input is consumed to the end of
/// the stream; this never fails.
///
/// Like a hand-written scanner, one token is always stepped over after a loop
/// body: the token following the closing brace, or following the window.
pub fn parse(tokens: &[String], bucket: LanguageBucket) -> Vec<AstNode> {
    let fn_keyword = function_keyword(bucket);
    let python = bucket == LanguageBucket::Python;
    let closing = closing_braces(tokens);

    // One frame per open loop body; nesting lives on the heap, not the call stack.
    let mut stack = vec![Frame::new(0, tokens.len(), 0, None)];

    while let Some(frame) = stack.last_mut() {
        if frame.i >= frame.end {
            let finished = stack.pop();
            match (finished, stack.last_mut()) {
                (
                    Some(Frame {
                        nodes,
                        owner: Some(keyword),
                        ..
                    }),
                    Some(parent),
                ) => {
                    let mut node = AstNode::leaf(NodeKind::Loop, keyword, parent.depth);
                    node.children = nodes;
                    parent.nodes.push(node);
                }
                (Some(root), None) => return root.nodes,
                _ => {}
            }
            continue;
        }

        let i = frame.i;
        let token = tokens[i].as_str();

        if token == "for" || token == "while" {
            let body = loop_body(tokens, &closing, i, frame.end, python);
            frame.i = body.resume;
            let depth = frame.depth + 1;
            stack.push(Frame::new(body.start, body.end, depth, Some(token)));
            continue;
        }

        if token == fn_keyword {
            let name = if i + 1 < frame.end {
                tokens[i + 1].as_str()
            } else {
                ""
            };
            frame
                .nodes
                .push(AstNode::leaf(NodeKind::Function, name, frame.depth));
            frame.i += 2;
            continue;
        }

        if token.contains('(') {
            let prev = if i > frame.start {
                tokens[i - 1].as_str()
            } else {
                ""
            };
            if !NON_CALL_PREFIXES.contains(&prev) {
                frame
                    .nodes
                    .push(AstNode::leaf(NodeKind::Call, token, frame.depth));
            }
        }
        frame.i += 1;
    }

    Vec::new()
}

/// A token range being parsed into sibling nodes.
struct Frame<'t> {
    start: usize,
    end: usize,
    i: usize,
    depth: usize,
    nodes: Vec<AstNode>,
    /// Keyword of the loop owning this body; `None` at the top level.
    owner: Option<&'t str>,
}

impl<'t> Frame<'t> {
    fn new(start: usize, end: usize, depth: usize, owner: Option<&'t str>) -> Self {
        Self {
            start,
            end,
            i: start,
            depth,
            nodes: Vec::new(),
            owner,
        }
    }
}

struct LoopBody {
    start: usize,
    end: usize,
    /// Where the enclosing range continues.
    resume: usize,
}

/// Index of the `}` closing each `{`, for every `{` that is closed.
fn closing_braces(tokens: &[String]) -> Vec<Option<usize>> {
    let mut closing = vec![None; tokens.len()];
    let mut open = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token.as_str() {
            "{" => open.push(i),
            "}" => {
                if let Some(start) = open.pop() {
                    closing[start] = Some(i);
                }
            }
            _ => {}
        }
    }
    closing
}

/// Locate the body of the loop whose keyword sits at `at`, within `..end`.
fn loop_body(
    tokens: &[String],
    closing: &[Option<usize>],
    at: usize,
    end: usize,
    python: bool,
) -> LoopBody {
    let block_start = if python { ":" } else { "{" };
    let mut i = at;
    while i < end && tokens[i] != block_start && tokens[i] != "{" {
        i += 1;
    }
    let start = (i + 1).min(end);

    if python {
        let body_end = (start + PYTHON_LOOP_WINDOW).min(end);
        return LoopBody {
            start,
            end: body_end,
            resume: body_end + 1,
        };
    }

    // the closing brace is not part of the body
    match closing.get(i).copied().flatten().filter(|&close| close < end) {
        Some(close) => LoopBody {
            start,
            end: close,
            resume: close + 2,
        },
        None => LoopBody {
            start,
            end,
            resume: end + 1,
        },
    }
}

/// Every loop node in the tree, depth-first, parents before children.
pub fn find_all_loops(nodes: &[AstNode]) -> Vec<&AstNode> {
    let mut loops = Vec::new();
    let mut pending: Vec<&AstNode> = nodes.iter().rev().collect();
    while let Some(node) = pending.pop() {
        if node.is_loop() {
            loops.push(node);
        }
        pending.extend(node.children.iter().rev());
    }
    loops
}

/// Most loops on any single path through `nodes`; 0 when there are none.
pub fn max_loop_nesting(nodes: &[AstNode]) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&AstNode, usize)> = nodes.iter().map(|node| (node, 0)).collect();
    while let Some((node, above)) = pending.pop() {
        let level = above + usize::from(node.is_loop());
        deepest = deepest.max(level);
        pending.extend(node.children.iter().map(|child| (child, level)));
    }
    deepest
}

/// Length of the longest loop-inside-loop chain starting at `lp`, counting `lp`.
pub fn loop_nesting_depth(lp: &AstNode) -> usize {
    1 + max_loop_nesting(&lp.children)
}
