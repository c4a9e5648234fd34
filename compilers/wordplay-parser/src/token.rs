/// Byte range of a token inside the source passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One whitespace-delimited run, punctuation included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub index: usize,
    pub span: Span,
    pub text: &'a str,
}

/// A mistake definition resolved against a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSpan {
    /// First covered token index.
    pub start: usize,
    /// Number of covered tokens.
    pub len: usize,
    /// The covered tokens as they appear in the passage.
    pub wrong: String,
    pub correct: String,
    /// Position of the definition in the authored list.
    pub definition: usize,
}

impl LocatedSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
