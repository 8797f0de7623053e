use colored::Colorize;

/// How a tracked or staged file differs from the working tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModificationKind {
    Modified,
    Deleted,
}

impl ModificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            ModificationKind::Modified => "(modified)",
            ModificationKind::Deleted => "(deleted)",
        }
    }

    pub fn colored_label(&self) -> colored::ColoredString {
        match self {
            ModificationKind::Modified => self.label().yellow(),
            ModificationKind::Deleted => self.label().red(),
        }
    }
}

impl std::fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
