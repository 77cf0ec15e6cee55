/// Replace the document text `[start, end)` with a widget showing `display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub start: usize,
    pub end: usize,
    pub display: String,
}

impl Decoration {
    pub fn new(start: usize, end: usize, display: String) -> Decoration {
        Decoration {
            start,
            end,
            display,
        }
    }
}

/// Decorations in ascending document order, none overlapping another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn new() -> DecorationSet {
        DecorationSet::default()
    }

    /// Append a decoration. Refused (returning false) if it is inverted or
    /// does not come strictly after the last one added.
    pub fn push(&mut self, decoration: Decoration) -> bool {
        if decoration.start > decoration.end {
            return false;
        }
        if let Some(last) = self
            .decorations
            .last()
        {
            if decoration.start < last.end || decoration.start <= last.start {
                return false;
            }
        }
        self.decorations
            .push(decoration);
        true
    }

    pub fn len(&self) -> usize {
        self.decorations
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations
            .is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations
            .iter()
    }

    /// The decoration starting at the given offset, if any.
    pub fn at(&self, start: usize) -> Option<&Decoration> {
        self.decorations
            .iter()
            .find(|decoration| decoration.start == start)
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
