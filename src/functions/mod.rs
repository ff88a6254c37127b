pub mod hyperbolic;
pub mod other;
pub mod trigonometric;

use std::collections::HashMap;
use std::sync::LazyLock;

/// A unary reducer. Domain errors are reported as a plain message and
/// wrapped by the executor together with the function name.
pub type Function = fn(f64) -> Result<f64, String>;

pub type FunctionTable = HashMap<&'static str, Function>;

static FUNCTIONS: LazyLock<FunctionTable> = LazyLock::new(|| {
    let mut table = FunctionTable::new();
    register_functions(&mut table);
    table
});

pub fn register_functions(table: &mut FunctionTable) {
    trigonometric::register(table);
    hyperbolic::register(table);
    other::register(table);
}

/// Looks up a built-in function by its lowercase name.
pub fn lookup(name: &str) -> Option<Function> {
    FUNCTIONS.get(name).copied()
}

pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}

/// Names of every built-in function, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = FUNCTIONS.keys().copied().collect();
    names.sort_unstable();
    names
}
