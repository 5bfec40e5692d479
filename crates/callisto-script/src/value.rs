// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Script value representation.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A script value.
///
/// Values are cheap to clone and safe to share between threads. Cloning an
/// [`Value::Object`] clones a handle, not the contents.
#[derive(Debug, Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String
    String(String),
    /// Object reference
    Object(Object),
}

/// A shared mutable key-value container with reference identity.
///
/// This is the shape of a module's exports: the runtime hands the same
/// object to every requester, and mutations made by the module body are
/// visible through all previously captured handles.
#[derive(Debug, Clone, Default)]
pub struct Object {
    slots: Arc<RwLock<HashMap<String, Value>>>,
}

impl Object {
    /// Create a new empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a slot, yielding `Value::Undefined` when it is absent.
    pub fn get(&self, key: &str) -> Value {
        self.slots.read().get(key).cloned().unwrap_or(Value::Undefined)
    }

    /// Write a slot in place.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.slots.write().insert(key.into(), value);
    }

    /// Whether a slot is present.
    pub fn has(&self, key: &str) -> bool {
        self.slots.read().contains_key(key)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Whether the object holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Whether two handles refer to the same underlying object.
    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Arc::ptr_eq(&a.slots, &b.slots)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                // NaN is never equal to itself
                if a.is_nan() && b.is_nan() {
                    false
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Object::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Create a new empty object value.
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// Returns true if this value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this value is nullish (null or undefined).
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Borrow the object handle, if this value is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Converts the value to a boolean (ToBoolean).
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Returns the type of this value as a string.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // Historical quirk
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Object(_) => write!(f, "[object Object]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_identity_is_shared_across_clones() {
        let obj = Object::new();
        let alias = obj.clone();

        obj.set("value", Value::Number(1.0));
        assert_eq!(alias.get("value"), Value::Number(1.0));
        assert!(Object::ptr_eq(&obj, &alias));
        assert!(!Object::ptr_eq(&obj, &Object::new()));
    }

    #[test]
    fn test_missing_slot_reads_as_undefined() {
        let obj = Object::new();
        assert!(obj.get("absent").is_undefined());
        assert!(!obj.has("absent"));
        assert!(obj.is_empty());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Number(2.0), Value::Number(2.0));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::String("a".into()), Value::String("a".into()));

        let obj = Object::new();
        assert_eq!(Value::Object(obj.clone()), Value::Object(obj.clone()));
        assert_ne!(Value::Object(obj), Value::object());
    }

    #[test]
    fn test_to_boolean_and_type_of() {
        assert!(!Value::Undefined.to_boolean());
        assert!(!Value::Number(0.0).to_boolean());
        assert!(Value::object().to_boolean());
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::object().type_of(), "object");
        assert_eq!(Value::Boolean(true).type_of(), "boolean");
    }
}
