use crate::error::{ExpressionError, Result};
use std::collections::{HashMap, HashSet};

/// Declared variables of one expression and their current values.
///
/// The set of names is fixed when the table is declared; afterwards only
/// values change. Names are stored lowercase, matching the normalized
/// expression text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    names: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl Variables {
    /// Declares every name with a value of zero, in the given order.
    pub fn declare<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut variables = Variables {
            names: Vec::with_capacity(names.len()),
            values: vec![0.0; names.len()],
            index: HashMap::with_capacity(names.len()),
        };

        for name in names {
            let name = name.as_ref().to_lowercase();
            if variables.index.contains_key(&name) {
                return Err(ExpressionError::DuplicateVariable(name));
            }
            variables.index.insert(name.clone(), variables.names.len());
            variables.names.push(name);
        }

        Ok(variables)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&slot| self.values[slot])
    }

    /// Sets a single declared variable. The name is matched case-insensitively.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let slot = self.slot(name)?;
        self.values[slot] = value;
        Ok(())
    }

    /// Assigns values in declaration order. Extra values are ignored and
    /// variables past the end of `values` keep what they had.
    pub fn assign_positional(&mut self, values: &[f64]) {
        for (slot, value) in self.values.iter_mut().zip(values) {
            *slot = *value;
        }
    }

    /// Assigns every entry of `context`. All names are checked before
    /// anything is written, so an unknown name, or two keys differing only
    /// in case, leave the table untouched.
    pub fn assign_context(&mut self, context: &HashMap<String, f64>) -> Result<()> {
        let mut claimed = HashSet::with_capacity(context.len());
        let mut updates = Vec::with_capacity(context.len());
        for (name, value) in context {
            let slot = self.slot(name)?;
            if !claimed.insert(slot) {
                return Err(ExpressionError::DuplicateVariable(self.names[slot].clone()));
            }
            updates.push((slot, *value));
        }

        for (slot, value) in updates {
            self.values[slot] = value;
        }
        Ok(())
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn slot(&self, name: &str) -> Result<usize> {
        match self.index.get(name) {
            Some(&slot) => Ok(slot),
            None => self
                .index
                .get(&name.to_lowercase())
                .copied()
                .ok_or_else(|| ExpressionError::UnknownVariable(name.to_string())),
        }
    }
}
