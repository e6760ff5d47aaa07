//! PlantUML mindmap text builder.
//!
//! The builder only concatenates: callers own escaping and formatting policy.

use std::fmt;


pub const DIAGRAM_START: &str = "@startmindmap\n";
pub const DIAGRAM_END: &str = "@endmindmap\n";

pub const DEPTH_TOKEN: &str = "*";
pub const BLOCK_OPEN: &str = ":";
pub const BLOCK_CLOSE: &str = ";";
pub const SEPARATOR: &str = "----";
const LINE_BREAK: char = '\n';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupBuilder {
    code: String,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.code.push_str(text);
        self
    }

    pub fn append_line(&mut self, text: &str) -> &mut Self {
        self.code.push_str(text);
        self.code.push(LINE_BREAK);
        self
    }

    /// `<<kind>>`, tagging a block with its representation kind.
    pub fn append_stereotype(&mut self, kind: &str) -> &mut Self {
        self.code.push_str("<<");
        self.code.push_str(kind);
        self.code.push_str(">>");
        self.code.push(LINE_BREAK);
        self
    }

    /// `[[target label]]`.
    pub fn append_link(&mut self, target: &str, label: &str) -> &mut Self {
        self.code.push_str("[[");
        self.code.push_str(target);
        self.code.push(' ');
        self.code.push_str(label);
        self.code.push_str("]]");
        self.code.push(LINE_BREAK);
        self
    }

    pub fn append_class_tag(&mut self, name: &str) -> &mut Self {
        self.code.push_str("(C) ");
        self.code.push_str(name);
        self.code.push(LINE_BREAK);
        self
    }

    pub fn append_separator(&mut self) -> &mut Self {
        self.append_line(SEPARATOR)
    }

    /// Depth marker for a block at `level` (root = 1) followed by the block-open token.
    pub fn open_block(&mut self, level: usize) -> &mut Self {
        self.code.push_str(&DEPTH_TOKEN.repeat(level));
        self.code.push_str(BLOCK_OPEN);
        self
    }

    pub fn close_block(&mut self) -> &mut Self {
        self.append_line(BLOCK_CLOSE)
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn into_body(self) -> String {
        self.code
    }

    /// Encloses the accumulated body in the mindmap start/end markers.
    pub fn wrap_as_diagram(self) -> String {
        let mut out =
            String::with_capacity(DIAGRAM_START.len() + self.code.len() + DIAGRAM_END.len());
        out.push_str(DIAGRAM_START);
        out.push_str(&self.code);
        out.push_str(DIAGRAM_END);
        out
    }
}

impl fmt::Display for MarkupBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
