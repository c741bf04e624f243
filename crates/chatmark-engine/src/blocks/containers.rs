use super::types::Container;

/// An ordered container stack, outermost first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContainerPath(pub Vec<Container>);

impl ContainerPath {
    /// Length of the longest shared prefix, comparing payloads as well as kinds.
    #[must_use]
    pub fn common_prefix_len(&self, other: &ContainerPath) -> usize {
        self.0
            .iter()
            .zip(&other.0)
            .take_while(|(a, b)| a == b)
            .count()
    }

    #[must_use]
    pub fn innermost(&self) -> Option<&Container> {
        self.0.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Containers from `depth` inwards.
    #[must_use]
    pub fn below(&self, depth: usize) -> &[Container] {
        &self.0[depth.min(self.0.len())..]
    }
}
