/// Generational handle: `(index, generation)`.
///
/// The generation lets a slot be reused without stale handles resolving to
/// the new occupant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn handles_compare_by_index_and_generation() {
        assert_eq!(Handle::new(3, 0), Handle::new(3, 0));
        assert_ne!(Handle::new(3, 0), Handle::new(3, 1));
        assert_eq!(Handle::new(7, 2).index(), 7);
        assert_eq!(Handle::new(7, 2).generation(), 2);
    }
}
