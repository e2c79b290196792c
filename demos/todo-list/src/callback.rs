// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

type ObserverFn<Arguments> = Box<dyn Fn(&Arguments)>;

/// A list of callbacks that are all invoked, in subscription order, on `notify`.
pub struct Observers<Arguments: ?Sized> {
    observers: RefCell<Vec<ObserverFn<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Observers<Arguments> {
    fn default() -> Self {
        Self { observers: Default::default() }
    }
}

impl<Arguments: ?Sized> Observers<Arguments> {
    pub fn subscribe(&self, f: impl Fn(&Arguments) + 'static) {
        self.observers.borrow_mut().push(Box::new(f));
    }

    pub fn notify(&self, a: &Arguments) {
        // taken out while running, so an observer may subscribe again
        let observers = self.observers.take();

        for observer in observers.iter() {
            observer(a);
        }

        let mut current = self.observers.borrow_mut();
        let added = std::mem::replace(&mut *current, observers);
        current.extend(added);
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}
