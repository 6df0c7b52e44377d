#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormatKind {
    MissingTag,
    SegmentCount,
    DateLayout,
    MethodPath,
}

impl std::fmt::Display for LineFormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTag => write!(f, "Missing [GIN] tag"),
            Self::SegmentCount => write!(f, "Unexpected segment count"),
            Self::DateLayout => write!(f, "Invalid date layout"),
            Self::MethodPath => write!(f, "Invalid method/URL format"),
        }
    }
}
