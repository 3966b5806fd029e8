// src/var/debug.rs
use crate::var::Var;
use std::fmt;

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Var(id={}, op={:?}, data={}, grad={}, requires_grad={}, is_leaf={})",
            self.id.index(),
            self.op(),
            self.data(),
            self.grad(),
            self.requires_grad(),
            self.is_leaf()
        )
    }
}

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
