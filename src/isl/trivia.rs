use crate::base::Span;

/// A single- or multi-line comment attached to an enclosing block.
///
/// Harvesting comments out of raw source trivia is a parser concern (out of
/// scope); by the time a block reaches the transformer its comments already
/// sit alongside its statements, each carrying enough span information to be
/// merged back into source-line order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTrivia {
    pub span: Span,
    pub is_multiline: bool,
    /// Already stripped of `//` / `/*` `*/` delimiters.
    pub text: String,
}
