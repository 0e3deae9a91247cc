/// Read-only, index-addressable sequence of symbols.
///
/// The table builders are written against this trait so that a pattern and
/// its mirror image go through the same code, with no reversed copy of the
/// data.
pub trait Symbols {
    fn len(&self) -> usize;

    /// Symbol at `i`. Panics if `i >= len()`.
    fn at(&self, i: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Symbols for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self[i]
    }
}

impl<const N: usize> Symbols for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self[i]
    }
}

impl Symbols for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self[i]
    }
}

impl<S: Symbols + ?Sized> Symbols for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        (**self).at(i)
    }
}

/// Mirror view: `Reversed(s).at(i) == s.at(s.len() - 1 - i)`.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<S>(pub S);

impl<S: Symbols> Symbols for Reversed<S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self.0.at(self.0.len() - 1 - i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: Symbols>(s: S) -> Vec<u8> {
        (0..s.len()).map(|i| s.at(i)).collect()
    }

    #[test]
    fn reversed_view_mirrors_indices() {
        let s: &[u8] = b"abcd";
        assert_eq!(collect(Reversed(s)), b"dcba".to_vec());
        assert_eq!(collect(Reversed(Reversed(s))), b"abcd".to_vec());
    }

    #[test]
    fn empty_view() {
        let s: &[u8] = b"";
        assert!(Reversed(s).is_empty());
    }
}
