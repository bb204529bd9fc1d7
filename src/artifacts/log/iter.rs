use crate::artifacts::objects::commit::Commit;

/// Walks a chain from its head through `previous` links, newest first
#[derive(Clone)]
pub struct Iter<'a> {
    current: Option<&'a Commit>,
}

impl<'a> Iter<'a> {
    pub fn new(head: Option<&'a Commit>) -> Self {
        Iter { current: head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.current?;
        // Move to the previous commit for the next iteration
        self.current = commit.previous();
        Some(commit)
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
