use std::collections::HashMap;

use crate::value::Value;

/// Variable bindings an expression is evaluated against.
///
/// Looking up a name that isn't bound yields [`Value::Nil`], unless
/// `strict_variables` is set, in which case evaluation fails instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    variables: HashMap<String, Value>,
    strict_variables: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict_variables: bool) -> Self {
        self.strict_variables = strict_variables;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_variables
    }

    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Context {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.define(name, value);
        }
    }
}
