use crate::Dialect;

/// Dialect-specific source of sequential, collision-free parameter
/// placeholders: `<prefix>Param0`, `<prefix>Param1`, ...
///
/// A generator is stateful per statement: numbering starts at 0 and
/// increments per call, and a fresh instance is used for every statement
/// construction. No counter is shared across statements or threads.
#[derive(Debug)]
pub struct ParamGenerator {
    prefix: char,
    index: usize,
}

impl ParamGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            prefix: dialect.prefix_char(),
            index: 0,
        }
    }

    /// The next placeholder in the sequence.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        let index = self.index;
        self.index += 1;
        format!("{}Param{index}", self.prefix)
    }
}
