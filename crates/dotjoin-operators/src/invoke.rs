//! Invoke a named zero-argument method on every element.
//!
//! Elements either implement [`Invocable`] themselves, or callers register
//! callables by name in a [`MethodTable`]. A name that does not resolve is
//! an error for the caller; nothing is skipped.

use std::collections::HashMap;
use std::fmt;

use crate::traits::OpError;

/// Something that can answer a zero-argument method call by name.
pub trait Invocable {
    type Output;

    /// `None` when the element has no method called `method`.
    fn invoke(&self, method: &str) -> Option<Self::Output>;
}

impl<T: Invocable + ?Sized> Invocable for &T {
    type Output = T::Output;

    fn invoke(&self, method: &str) -> Option<Self::Output> {
        (**self).invoke(method)
    }
}

/// Call `method` on every element, in order.
pub fn invoke_method<I>(
    method: &str,
    collection: I,
) -> Result<Vec<<I::Item as Invocable>::Output>, OpError>
where
    I: IntoIterator,
    I::Item: Invocable,
{
    collection
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.invoke(method).ok_or_else(|| OpError::MethodNotFound {
                method: method.to_string(),
                index,
            })
        })
        .collect()
}

type Method<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// Name → callable registry for element types that do not implement
/// [`Invocable`].
pub struct MethodTable<T, R> {
    methods: HashMap<String, Method<T, R>>,
}

impl<T, R> Default for MethodTable<T, R> {
    fn default() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }
}

impl<T, R> fmt::Debug for MethodTable<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.methods.keys().collect();
        names.sort();
        f.debug_struct("MethodTable").field("methods", &names).finish()
    }
}

impl<T, R> MethodTable<T, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MethodTable::register`].
    pub fn with<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.register(name, method);
        self
    }

    /// Register (or replace) the callable for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn call(&self, name: &str, target: &T) -> Option<R> {
        self.methods.get(name).map(|method| method(target))
    }

    /// Same contract as [`invoke_method`]: one result per element, or
    /// `MethodNotFound` at the first element when `name` is unknown.
    pub fn invoke_all<'a, I>(&self, name: &str, collection: I) -> Result<Vec<R>, OpError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let method = self.methods.get(name);
        collection
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                method
                    .map(|m| m(item))
                    .ok_or_else(|| OpError::MethodNotFound {
                        method: name.to_string(),
                        index,
                    })
            })
            .collect()
    }
}
