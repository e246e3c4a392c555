//! `where`: keep elements matching an index-aware predicate.

/// Iterator adapter returned by [`filter`].
///
/// `index` counts upstream elements, so it advances for rejected elements too.
pub struct Where<I, P> {
    source: I,
    predicate: P,
    index: usize,
}

impl<I, P> Iterator for Where<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.source.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

#[doc(alias = "where")]
pub fn filter<I, P>(source: I, predicate: P) -> Where<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    Where {
        source: source.into_iter(),
        predicate,
        index: 0,
    }
}
