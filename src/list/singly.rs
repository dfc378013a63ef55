use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::error::{ListError, Result};
use crate::Elem;

type Link = Option<Rc<RefCell<Node>>>;

struct Node {
  elem: Elem,
  next: Link,
}

/// The allocated list record: the node chain plus its length counter.
struct Chain {
  head: Link,
  tail: Link,
  len: usize,
}

impl Chain {
  fn new() -> Self {
    Self {
      head: None,
      tail: None,
      len: 0,
    }
  }

  /// Walks `position` links from the head. `None` if the walk falls off
  /// the end of the chain.
  fn node_at(&self, position: usize) -> Option<Rc<RefCell<Node>>> {
    let mut cur = Rc::clone(self.head.as_ref()?);
    for _ in 0..position {
      let next = match &cur.borrow().next {
        Some(next) => Rc::clone(next),
        None => return None,
      };
      cur = next;
    }
    Some(cur)
  }

  /// Unlinks every node in a loop; node drops must not recurse down the
  /// chain.
  fn release(&mut self) {
    self.tail = None;
    let mut cur = self.head.take();
    while let Some(node) = cur {
      cur = node.borrow_mut().next.take();
    }
    self.len = 0;
  }
}

impl Drop for Chain {
  fn drop(&mut self) {
    self.release();
  }
}

/// An ordered sequence of elements kept in a singly linked chain, with
/// constant-time access to both ends and a running length counter.
///
/// A freshly created list is allocated and empty. [`free`](Self::free)
/// releases the chain and leaves the handle unallocated; every later
/// operation on the handle reports [`ListError::NotAllocated`] instead of
/// faulting.
pub struct LinkedList {
  chain: Option<Chain>,
}

impl LinkedList {
  /// Creates a new, empty `LinkedList`.
  pub fn new() -> Self {
    Self {
      chain: Some(Chain::new()),
    }
  }

  fn chain(&self) -> Result<&Chain> {
    self.chain.as_ref().ok_or(ListError::NotAllocated)
  }

  fn chain_mut(&mut self) -> Result<&mut Chain> {
    self.chain.as_mut().ok_or(ListError::NotAllocated)
  }

  /// Prepends an element; the new node becomes the head. The first node
  /// inserted into an empty list becomes both head and tail.
  pub fn insert_head(&mut self, elem: Elem) -> Result<()> {
    let chain = self.chain_mut()?;

    let node = Rc::new(RefCell::new(Node {
      elem: elem,
      next: chain.head.take(),
    }));

    if chain.tail.is_none() {
      chain.tail = Some(Rc::clone(&node));
    }
    chain.head = Some(node);
    chain.len += 1;

    Ok(())
  }

  /// Appends an element; the new node becomes the tail.
  pub fn insert_tail(&mut self, elem: Elem) -> Result<()> {
    let chain = self.chain_mut()?;

    let node = Rc::new(RefCell::new(Node {
      elem: elem,
      next: None,
    }));

    match chain.tail.take() {
      Some(tail) => tail.borrow_mut().next = Some(Rc::clone(&node)),
      None => chain.head = Some(Rc::clone(&node)),
    }
    chain.tail = Some(node);
    chain.len += 1;

    Ok(())
  }

  /// Inserts an element so that it occupies `position` in the resulting
  /// sequence. Valid positions run from 0 through the current length;
  /// inserting at the length appends. The boundaries delegate to
  /// [`insert_head`](Self::insert_head) and
  /// [`insert_tail`](Self::insert_tail); interior positions walk to the
  /// predecessor node and splice.
  pub fn insert_at(&mut self, elem: Elem, position: usize) -> Result<()> {
    let len = self.chain()?.len;

    if position > len {
      return Err(ListError::InvalidPosition);
    }
    if position == 0 {
      return self.insert_head(elem);
    }
    if position == len {
      return self.insert_tail(elem);
    }

    let chain = self.chain_mut()?;
    let prev = chain
      .node_at(position - 1)
      .ok_or(ListError::InvalidPosition)?;

    let mut prev_node = prev.borrow_mut();
    let node = Rc::new(RefCell::new(Node {
      elem: elem,
      next: prev_node.next.take(),
    }));
    prev_node.next = Some(node);
    drop(prev_node);
    chain.len += 1;

    Ok(())
  }

  /// Removes the first element. The tail is cleared when the removed node
  /// was the only one.
  pub fn delete_head(&mut self) -> Result<()> {
    let chain = self.chain_mut()?;

    let head = chain.head.take().ok_or(ListError::Empty)?;
    chain.head = head.borrow_mut().next.take();
    if chain.head.is_none() {
      chain.tail = None;
    }
    chain.len -= 1;

    Ok(())
  }

  /// Removes the last element. The chain has no back links, so this walks
  /// from the head to find the tail's predecessor.
  pub fn delete_tail(&mut self) -> Result<()> {
    let chain = self.chain_mut()?;

    if chain.tail.is_none() {
      return Err(ListError::Empty);
    }
    if chain.len == 1 {
      chain.head = None;
      chain.tail = None;
      chain.len = 0;
      return Ok(());
    }

    let prev = chain.node_at(chain.len - 2).ok_or(ListError::Empty)?;
    prev.borrow_mut().next = None;
    chain.tail = Some(prev);
    chain.len -= 1;

    Ok(())
  }

  /// Removes the element at `position`. Position 0 delegates to
  /// [`delete_head`](Self::delete_head), so removing from an empty list at
  /// position 0 reports [`ListError::Empty`]; any other position with no
  /// corresponding node reports [`ListError::InvalidPosition`].
  pub fn delete_at(&mut self, position: usize) -> Result<()> {
    if position == 0 {
      return self.delete_head();
    }

    let chain = self.chain_mut()?;
    if position >= chain.len {
      return Err(ListError::InvalidPosition);
    }

    let prev = chain
      .node_at(position - 1)
      .ok_or(ListError::InvalidPosition)?;

    let mut prev_node = prev.borrow_mut();
    let removed = prev_node.next.take().ok_or(ListError::InvalidPosition)?;
    prev_node.next = removed.borrow_mut().next.take();
    drop(prev_node);

    if position == chain.len - 1 {
      chain.tail = Some(prev);
    }
    chain.len -= 1;

    Ok(())
  }

  /// Tests if the list holds no elements. An unallocated handle reports
  /// `false`, never an error.
  pub fn is_empty(&self) -> bool {
    self.chain.as_ref().map_or(false, |chain| chain.len == 0)
  }

  /// Returns the number of elements. An unallocated handle reports 0.
  pub fn len(&self) -> usize {
    self.chain.as_ref().map_or(0, |chain| chain.len)
  }

  /// Returns the value stored at the head.
  pub fn get_head(&self) -> Result<Elem> {
    let chain = self.chain()?;
    match &chain.head {
      Some(node) => Ok(node.borrow().elem),
      None => Err(ListError::Empty),
    }
  }

  /// Returns the value stored at the tail.
  pub fn get_tail(&self) -> Result<Elem> {
    let chain = self.chain()?;
    match &chain.tail {
      Some(node) => Ok(node.borrow().elem),
      None => Err(ListError::Empty),
    }
  }

  /// Returns the value stored at `position`. Valid positions run from 0
  /// through `len - 1`; the boundaries delegate to
  /// [`get_head`](Self::get_head) and [`get_tail`](Self::get_tail).
  pub fn get_at(&self, position: usize) -> Result<Elem> {
    let chain = self.chain()?;

    if position >= chain.len {
      return Err(ListError::InvalidPosition);
    }
    if position == 0 {
      return self.get_head();
    }
    if position == chain.len - 1 {
      return self.get_tail();
    }

    let node = chain.node_at(position).ok_or(ListError::InvalidPosition)?;
    let elem = node.borrow().elem;
    Ok(elem)
  }

  /// Writes the sequence to stdout as `v1 -> v2 -> ... -> END`, followed
  /// by a newline. An empty or unallocated list writes nothing.
  pub fn print(&self) {
    if self.len() == 0 {
      return;
    }
    println!("{}", self);
  }

  /// Releases every node and the list record itself. The handle is left
  /// unallocated, so a second `free` reports
  /// [`ListError::NotAllocated`] rather than faulting.
  pub fn free(&mut self) -> Result<()> {
    match self.chain.take() {
      Some(chain) => {
        trace!("freeing list of length {}", chain.len);
        Ok(())
      }
      None => Err(ListError::NotAllocated),
    }
  }
}

impl fmt::Display for LinkedList {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let chain = match &self.chain {
      Some(chain) => chain,
      None => return Ok(()),
    };

    let mut cur = chain.head.as_ref().map(Rc::clone);
    while let Some(node) = cur {
      write!(f, "{} -> ", node.borrow().elem)?;
      cur = node.borrow().next.as_ref().map(Rc::clone);
    }
    if chain.len > 0 {
      write!(f, "END")?;
    }

    Ok(())
  }
}
