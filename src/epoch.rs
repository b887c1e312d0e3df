use std::rc::Rc;

/// Opaque identity naming a writable generation of a tree.
///
/// Two nodes sharing an `Epoch` are owned by the same generation and may
/// be mutated in place by the tree that currently carries it. Cloning a
/// tree mints two *new* epochs, one for the original and one for the
/// clone, so everything they used to share is frozen with respect to
/// both sides from that point on. Any write that reaches a node tagged
/// with a stale epoch must duplicate it first.
#[derive(Clone)]
pub(crate) struct Epoch(Rc<()>);

impl Epoch {
    pub(crate) fn new() -> Self {
        Epoch(Rc::new(()))
    }

    pub(crate) fn same(&self, other: &Epoch) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
