use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Caller-owned value that a controlled toggle reads from and writes to via
/// `on_change`. Clones share the same cell.
pub struct ExternalStore<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Option<Rc<dyn Fn(&T)>>>,
}

impl<T> Clone for ExternalStore<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> ExternalStore<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    /// Ids freed by `unsubscribe` are handed out again.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let f: Rc<dyn Fn(&T)> = Rc::new(f);
        if let Some(id) = inner.subs.iter().position(Option::is_none) {
            inner.subs[id] = Some(f);
            return id;
        }
        inner.subs.push(Some(f));
        inner.subs.len() - 1
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.iter().flatten().count()
    }

    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }

    // Subscribers may read the store but must not write to it.
    fn notify(&self) {
        let subs: Vec<Rc<dyn Fn(&T)>> = self.0.borrow().subs.iter().flatten().cloned().collect();
        if subs.is_empty() {
            return;
        }
        let inner = self.0.borrow();
        for s in &subs {
            s(&inner.value);
        }
    }
}

pub fn store<T>(t: T) -> ExternalStore<T> {
    ExternalStore::new(t)
}
