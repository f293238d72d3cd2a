use std::fmt;
use std::iter::FromIterator;

/// A stable handle to a node slot inside a **LinkedList**'s arena.
///
/// Handles stay valid for as long as the node they name is in the list. Once the node is
/// removed its slot may be handed out again to a later node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the slot inside the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What index operations do with an index at or past the end of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Operate at the end of the list: `node` returns the last node, `delete` removes the
    /// last node and `insert` appends.
    Clamp,
    /// Treat the index as absent: `node` and `delete` return None, `insert` does nothing.
    /// Inserting at exactly `len()` still appends.
    Strict,
}

impl Default for IndexPolicy {
    fn default() -> IndexPolicy {
        IndexPolicy::Clamp
    }
}

/// One element of the chain. **next** names the following node, or is None at the tail.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<NodeId>) -> Node<T> {
        Node { value, next }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// A singly linked list with O(1) push, pop and append.
///
/// Nodes live in an arena owned by the list and point at each other through **NodeId**
/// handles. **head** and **tail** are handles too, so relinking is always an index update and
/// the tail never owns anything.
///
/// **Invariants** (checked by `is_well_formed`):
/// * head is None if and only if tail is None
/// * head == tail if and only if the list has exactly one node
/// * walking `next` from head visits `len` distinct nodes and stops at tail
pub struct LinkedList<T> {
    /// Node storage. A None slot is free and listed in **free**.
    nodes: Vec<Option<Node<T>>>,
    /// Slots released by removals, reused before the arena grows
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    policy: IndexPolicy,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList::with_policy(IndexPolicy::default())
    }

    pub fn with_policy(policy: IndexPolicy) -> LinkedList<T> {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            policy,
        }
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: IndexPolicy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn front(&self) -> Option<&T> {
        self.head().map(Node::value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail().map(Node::value)
    }

    /// Look up a node by handle. Returns None if the slot is free or out of the arena.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Add a value to the front of the list
    pub fn push(&mut self, value: T) {
        let id = self.alloc(Node::new(value, self.head));
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    /// Remove the front node and return its value
    pub fn pop(&mut self) -> Option<T> {
        // Capture the old head before head moves on
        let old_head = self.head?;
        let node = self.release(old_head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Add a value to the end of the list
    pub fn append(&mut self, value: T) {
        let id = self.alloc(Node::new(value, None));
        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Remove the last node and return its value
    ///
    /// Walks from head keeping one node of lag, so that when **current** reaches the tail,
    /// **new_tail** is the node before it.
    pub fn remove_last(&mut self) -> Option<T> {
        let head = self.head?;
        if self.get(head)?.next.is_none() {
            return self.pop();
        }

        let mut new_tail = head;
        let mut current = head;
        while let Some(next) = self.get(current)?.next {
            new_tail = current;
            current = next;
        }

        self.set_next(new_tail, None);
        self.tail = Some(new_tail);
        self.len -= 1;
        self.release(current).map(Node::into_value)
    }

    /// Return the node at **index**.
    ///
    /// Negative indices return None. Past the end, see **IndexPolicy**.
    pub fn node(&self, index: isize) -> Option<&Node<T>> {
        let index = self.checked_index("node", index, self.len)?;
        let (_, current) = self.seek(index);
        current.and_then(|id| self.get(id))
    }

    /// Remove the node at **index** and return its value.
    ///
    /// Index 0 is a `pop`, the last position is a `remove_last`; anything in between is
    /// unlinked from its predecessor.
    pub fn delete(&mut self, index: isize) -> Option<T> {
        let index = self.checked_index("delete", index, self.len)?;
        if index == 0 {
            return self.pop();
        }

        let (previous, current) = self.seek(index);
        let current = current?;
        let next = self.get(current)?.next;
        if next.is_none() {
            return self.remove_last();
        }

        // current has a successor, so seek walked at least one step and previous is set
        self.set_next(previous?, next);
        self.len -= 1;
        self.release(current).map(Node::into_value)
    }

    /// Insert **value** so that it ends up at **index**. Returns whether anything was inserted.
    pub fn insert(&mut self, value: T, index: isize) -> bool {
        let index = match self.checked_index("insert", index, self.len + 1) {
            Some(index) => index,
            None => return false,
        };
        if index == 0 {
            self.push(value);
            return true;
        }

        let (_, previous) = self.seek(index - 1);
        let successor = previous.and_then(|id| self.get(id)).and_then(|node| node.next);
        match (previous, successor) {
            (Some(previous), Some(successor)) => {
                let id = self.alloc(Node::new(value, Some(successor)));
                self.set_next(previous, Some(id));
                self.len += 1;
            }
            // Insertion point is the end of the chain
            _ => self.append(value),
        }
        true
    }

    /// Reverse the list in place. No node is created or destroyed.
    pub fn reverse(&mut self) {
        let mut previous: Option<NodeId> = None;
        let mut current = self.head;
        self.tail = self.head;

        while let Some(id) = current {
            let lookahead = self.get(id).and_then(|node| node.next);
            self.set_next(id, previous);
            previous = Some(id);
            current = lookahead;
        }

        self.head = previous;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Check every structural invariant of the list.
    pub fn is_well_formed(&self) -> bool {
        if self.head.is_none() != self.tail.is_none() {
            return false;
        }
        let occupied = self.nodes.iter().filter(|slot| slot.is_some()).count();
        if occupied != self.len || occupied + self.free.len() != self.nodes.len() {
            return false;
        }

        let mut visited = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(id) = current {
            // More steps than nodes means we went around a cycle
            if visited == self.len {
                return false;
            }
            let node = match self.get(id) {
                Some(node) => node,
                None => return false,
            };
            visited += 1;
            last = Some(id);
            current = node.next;
        }

        if visited != self.len || last != self.tail {
            return false;
        }
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head == tail) == (self.len == 1),
            _ => self.len == 0,
        }
    }

    // Walk from head at most `index` steps, stopping early at the last node. Returns the node
    // reached and the one before it.
    fn seek(&self, index: usize) -> (Option<NodeId>, Option<NodeId>) {
        let mut previous = None;
        let mut current = self.head;
        let mut counter = 0;
        while let Some(id) = current {
            if counter >= index {
                break;
            }
            match self.get(id).and_then(|node| node.next) {
                Some(next) => {
                    previous = Some(id);
                    current = Some(next);
                    counter += 1;
                }
                None => break,
            }
        }
        (previous, current)
    }

    // Apply the negative-index rule and the index policy. `limit` is the first index that
    // counts as out of range for the operation.
    fn checked_index(&self, op: &str, index: isize, limit: usize) -> Option<usize> {
        if index < 0 {
            log::debug!("[{}] ignoring negative index {}", op, index);
            return None;
        }
        let index = index as usize;
        if index >= limit {
            match self.policy {
                IndexPolicy::Strict => {
                    log::warn!("[{}] index {} out of range for length {}", op, index, self.len);
                    return None;
                }
                IndexPolicy::Clamp => {
                    log::debug!("[{}] clamping index {} to the end (length {})", op, index, self.len);
                }
            }
        }
        Some(index)
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.next = next;
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let node = self.nodes.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(node)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> LinkedList<T> {
        LinkedList::new()
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Render as `[1, 2, 3]`. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::with_policy(self.policy);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator, head to tail
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.get(self.current?)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator, pops from the front
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
