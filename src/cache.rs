use crate::error::Result;
use crate::expression::Expression;
use crate::postfix::Program;
use crate::variables::Variables;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    expression: String,
    variables: Vec<String>,
}

/// Keeps recently compiled programs so the same formula is only
/// tokenized and converted once.
///
/// Each call to [`ExpressionCache::compile`] hands out a new [`Expression`]
/// with its own variable table, all pointing at one shared [`Program`].
pub struct ExpressionCache {
    programs: LruCache<CacheKey, Arc<Program>>,
}

impl ExpressionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            programs: LruCache::new(capacity),
        }
    }

    pub fn compile<S: AsRef<str>>(&mut self, expression: &str, variables: &[S]) -> Result<Expression> {
        let table = Variables::declare(variables)?;
        let key = CacheKey {
            expression: expression.to_string(),
            variables: table.names().to_vec(),
        };

        if let Some(program) = self.programs.get(&key) {
            debug!("cache hit: {expression}");
            return Ok(Expression::from_program(Arc::clone(program), table));
        }

        debug!("cache miss: {expression}");
        let program = Arc::new(Program::compile(expression, &table)?);
        self.programs.put(key, Arc::clone(&program));
        Ok(Expression::from_program(program, table))
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn clear(&mut self) {
        self.programs.clear();
    }
}

impl Default for ExpressionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
