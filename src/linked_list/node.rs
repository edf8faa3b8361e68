use core::ptr::NonNull;

/// A node in a singly linked list: a value and its forward link.
pub(crate) struct SinglyNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<SinglyNode<T>>>,
}

impl<T> SinglyNode<T> {
    /// Heap-allocates a node and hands back its pointer. The list that called
    /// this becomes the node's owner and must reclaim it with [`dealloc`].
    ///
    /// [`dealloc`]: SinglyNode::dealloc
    pub(crate) fn alloc(value: T, next: Option<NonNull<Self>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }

    /// Reclaims a node allocated by [`alloc`], returning its value.
    ///
    /// # Safety
    ///
    /// `node` must come from [`alloc`], must not have been reclaimed already,
    /// and no other pointer to it may be used afterwards.
    ///
    /// [`alloc`]: SinglyNode::alloc
    pub(crate) unsafe fn dealloc(node: NonNull<Self>) -> T {
        unsafe { Box::from_raw(node.as_ptr()).value }
    }
}

/// A node in a doubly linked list.
///
/// `next` is the owning link (the chain's values are reclaimed by following
/// it); `prev` is a plain back-pointer used only for traversal.
pub(crate) struct DoublyNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<DoublyNode<T>>>,
    pub(crate) prev: Option<NonNull<DoublyNode<T>>>,
}

impl<T> DoublyNode<T> {
    /// Heap-allocates a node; the list reclaims it with `Box::from_raw` once
    /// the neighbors' links have been rerouted around it.
    pub(crate) fn alloc(
        value: T,
        next: Option<NonNull<Self>>,
        prev: Option<NonNull<Self>>,
    ) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next, prev })))
    }
}
