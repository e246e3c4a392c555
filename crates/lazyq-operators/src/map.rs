//! `select`: one-to-one projection with the upstream index.

pub struct Select<I, F> {
    source: I,
    selector: F,
    index: usize,
}

impl<U, I, F> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.selector)(&item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

pub fn select<I, U, F>(source: I, selector: F) -> Select<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> U,
{
    Select {
        source: source.into_iter(),
        selector,
        index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_with_index() {
        let out: Vec<_> = select(["a", "b"], |x, i| format!("{x}{i}")).collect();
        assert_eq!(out, vec!["a0", "b1"]);
    }

    #[test]
    fn test_select_changes_type() {
        let out: Vec<String> = select([1, 2, 3], |x, _| (x * 2).to_string()).collect();
        assert_eq!(out, vec!["2", "4", "6"]);
    }
}
