use crate::functions::FunctionTable;

pub fn register(table: &mut FunctionTable) {
    table.insert("sinh", |x| Ok(x.sinh()));
    table.insert("cosh", |x| Ok(x.cosh()));
    table.insert("tanh", |x| Ok(x.tanh()));
    table.insert("ctanh", |x| Ok(1.0 / x.tanh()));
}
