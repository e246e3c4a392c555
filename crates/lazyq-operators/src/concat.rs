//! `append`, `prepend`, `concat`. None of these buffer.

pub struct Append<I: Iterator> {
    source: Option<I>,
    element: Option<I::Item>,
}

impl<I: Iterator> Iterator for Append<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(item) => return Some(item),
                None => self.source = None,
            }
        }
        self.element.take()
    }
}

pub fn append<I: IntoIterator>(source: I, element: I::Item) -> Append<I::IntoIter> {
    Append {
        source: Some(source.into_iter()),
        element: Some(element),
    }
}

pub struct Prepend<I: Iterator> {
    element: Option<I::Item>,
    source: I,
}

impl<I: Iterator> Iterator for Prepend<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.element.take() {
            Some(element) => Some(element),
            None => self.source.next(),
        }
    }
}

pub fn prepend<I: IntoIterator>(source: I, element: I::Item) -> Prepend<I::IntoIter> {
    Prepend {
        element: Some(element),
        source: source.into_iter(),
    }
}

/// Drains `first`, then `second`. `second` is not touched until `first` is
/// exhausted.
pub struct Concat<I, J> {
    first: Option<I>,
    second: J,
}

impl<I, J> Iterator for Concat<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(first) = self.first.as_mut() {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second.next()
    }
}

pub fn concat<I, J>(source: I, other: J) -> Concat<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    Concat {
        first: Some(source.into_iter()),
        second: other.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_prepend() {
        assert_eq!(append([1, 2, 3], 4).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(prepend([2, 3], 1).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(append(Vec::<i32>::new(), 1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(prepend(Vec::<i32>::new(), 1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_concat_is_lazy_on_second() {
        let mut second_pulled = 0;
        let second = [3, 4].into_iter().inspect(|_| second_pulled += 1);
        let mut node = concat([1, 2], second);
        assert_eq!(node.next(), Some(1));
        assert_eq!(node.next(), Some(2));
        drop(node);
        assert_eq!(second_pulled, 0);
    }

    #[test]
    fn test_concat_empty_sides() {
        assert_eq!(concat([1, 2], Vec::new()).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(concat(Vec::new(), [3, 4]).collect::<Vec<_>>(), vec![3, 4]);
    }
}
