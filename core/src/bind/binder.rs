//! Registering bound methods under a class.
//!
//! [`ClassBinder`] is a fluent builder: every `bind` names a method, its
//! arguments and defaults. Problems are collected and reported together by
//! [`ClassBinder::build`], which yields an immutable [`ClassMethods`] table.

use alloc::sync::Arc;
use alloc::vec::Vec;

use bindery_types::StringName;
use bindery_values::Variant;
use hashbrown::HashMap;

use super::method_bind::MethodBind;
use super::method_info::MethodInfo;
use crate::object::{Class, Receiver};
use crate::{BindError, BindOptions, CallError, CallErrorKind};

/// Builder for the method table of one class.
pub struct ClassBinder {
    class: StringName,
    options: BindOptions,
    methods: HashMap<StringName, Arc<MethodBind>>,
    order: Vec<StringName>,
    errors: Vec<BindError>,
}

impl ClassBinder {
    pub fn new(class: impl Into<StringName>) -> Self {
        Self {
            class: class.into(),
            options: BindOptions::default(),
            methods: HashMap::new(),
            order: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A binder for the class `T`.
    pub fn of<T: Class>() -> Self {
        Self::new(T::class_name_atom())
    }

    /// Options applied to every bind registered after this call, except binds
    /// whose options were set explicitly.
    pub fn with_options(mut self, options: BindOptions) -> Self {
        self.options = options;
        self
    }

    /// Register `bind` as `name` with the given argument names.
    pub fn bind(self, name: &str, argument_names: &[&str], bind: MethodBind) -> Self {
        self.bind_with_defaults(name, argument_names, bind, Vec::new())
    }

    /// Register `bind` with defaults for its trailing arguments.
    pub fn bind_with_defaults(
        mut self,
        name: &str,
        argument_names: &[&str],
        mut bind: MethodBind,
        defaults: Vec<Variant>,
    ) -> Self {
        bind.set_name(name);
        if bind.instance_class().is_empty() {
            bind.set_instance_class(self.class.clone());
        }
        bind.inherit_options(self.options);

        // Vararg binds take their names from the declared arguments.
        if !bind.is_vararg() {
            let names = argument_names.iter().map(|n| StringName::from(*n)).collect();
            if let Err(error) = bind.set_argument_names(names) {
                self.errors.push(error);
                return self;
            }
        }
        let applied = match defaults.is_empty() {
            true => Ok(()),
            false => bind.set_default_arguments(defaults),
        };
        if let Err(error) = applied {
            self.errors.push(error);
            return self;
        }

        let name = bind.name().clone();
        if self.methods.contains_key(&name) {
            self.errors.push(BindError::DuplicateMethod {
                class: self.class.clone(),
                method: name,
            });
            return self;
        }

        tracing::debug!(
            class = %self.class,
            method = %name,
            method_id = bind.method_id(),
            hash = bind.hash(),
            "Registered method"
        );
        self.order.push(name.clone());
        self.methods.insert(name, Arc::new(bind));
        self
    }

    /// Finish registration, or report every problem found.
    pub fn build(self) -> Result<ClassMethods, Vec<BindError>> {
        if !self.errors.is_empty() {
            tracing::error!(
                class = %self.class,
                errors = self.errors.len(),
                "Class registration failed"
            );
            return Err(self.errors);
        }
        Ok(ClassMethods {
            class: self.class,
            methods: self.methods,
            order: self.order,
        })
    }
}

/// The registered methods of one class, in registration order.
#[derive(Debug, Clone)]
pub struct ClassMethods {
    class: StringName,
    methods: HashMap<StringName, Arc<MethodBind>>,
    order: Vec<StringName>,
}

impl ClassMethods {
    pub fn class_name(&self) -> &StringName {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<&Arc<MethodBind>> {
        self.methods.get(&StringName::from(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Binds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<MethodBind>> {
        self.order.iter().filter_map(|name| self.methods.get(name))
    }

    pub fn method_list(&self) -> Vec<MethodInfo> {
        self.iter().map(|bind| bind.method_info()).collect()
    }

    /// Look up `name` and call it dynamically.
    pub fn call(
        &self,
        name: &str,
        object: Receiver<'_>,
        args: &[&Variant],
    ) -> Result<Variant, CallError> {
        match self.get(name) {
            Some(bind) => bind.call(object, args),
            None => {
                let method = StringName::from(name);
                Err(CallError::new(
                    method.clone(),
                    CallErrorKind::InvalidMethod(method),
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;
