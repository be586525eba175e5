use std::fmt::{self, Debug};
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not find unbound variable {0}")]
pub struct UnboundName(pub String);

struct Frame<T> {
    name: String,
    value: T,
    parent: Option<Rc<Frame<T>>>,
}

/// Persistent name -> `T` mapping. Extending never touches the original,
/// so an environment can be kept around after a nested scope has been built on it.
pub struct Env<T> {
    head: Option<Rc<Frame<T>>>,
}

impl<T> Env<T> {
    pub fn empty() -> Env<T> {
        Env { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// A new environment with `name` bound to `val`, shadowing any earlier binding.
    pub fn extended(&self, name: impl Into<String>, val: T) -> Env<T> {
        Env {
            head: Some(Rc::new(Frame {
                name: name.into(),
                value: val,
                parent: self.head.clone(),
            })),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&T, UnboundName> {
        self.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .ok_or_else(|| UnboundName(name.to_string()))
    }

    /// Bindings from the most recent outwards, shadowed ones included.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl<T> Clone for Env<T> {
    fn clone(&self) -> Self {
        Env {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for Env<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Debug> Debug for Env<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Drop for Env<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned frames one at a time so long chains don't recurse.
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Frame<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.current?;
        self.current = frame.parent.as_deref();
        Some((frame.name.as_str(), &frame.value))
    }
}
