/// The three discrete logo layouts.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum LogoStyle {
    /// Only the mark, centered.
    #[default]
    MarkOnly,
    /// Mark on the left, label on the right.
    Horizontal,
    /// Mark on top, label underneath.
    Stacked,
}

impl LogoStyle {
    /// Signed position of this style on the morph axis: stacked −1, mark-only 0, horizontal +1.
    pub fn position(self) -> f64 {
        match self {
            Self::MarkOnly => 0.0,
            Self::Horizontal => 1.0,
            Self::Stacked => -1.0,
        }
    }

    /// Successor in the round-robin cycle MarkOnly → Horizontal → Stacked → MarkOnly.
    pub fn next(self) -> Self {
        match self {
            Self::MarkOnly => Self::Horizontal,
            Self::Horizontal => Self::Stacked,
            Self::Stacked => Self::MarkOnly,
        }
    }
}
