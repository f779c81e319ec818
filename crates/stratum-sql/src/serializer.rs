#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod ident;
use ident::Ident;

mod params;
pub use params::ParamGenerator;

// Fragment serializers
mod statement;
mod value;
use value::Bind;

use crate::{stmt::Statement, Dialect};

use stratum_core::stmt::Value;

/// One synthesized statement: the SQL text plus the ordered parameters bound
/// into it, handed to a database-execution collaborator for literal,
/// in-order execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub text: String,
    pub params: Vec<Param>,
}

/// A parameter bound into a statement: the dialect-specific placeholder that
/// appears in the text and the literal value it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub placeholder: String,
    pub value: Value,
}

/// Serialize a statement to parameterized SQL for one dialect.
#[derive(Debug)]
pub struct Serializer {
    dialect: Dialect,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Parameters bound so far, in placeholder order
    params: &'a mut Vec<Param>,

    /// Placeholder source. One per statement, so numbering restarts at 0 for
    /// every serialized statement.
    generator: ParamGenerator,
}

impl Serializer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn serialize(&self, stmt: &Statement) -> SqlStatement {
        let mut text = String::new();
        let mut params = Vec::new();

        let mut fmt = Formatter {
            dst: &mut text,
            params: &mut params,
            generator: ParamGenerator::new(self.dialect),
        };

        stmt.to_sql(&mut fmt);

        SqlStatement { text, params }
    }
}

impl Formatter<'_> {
    /// Append the next placeholder to the SQL text and record the value it
    /// binds.
    fn bind(&mut self, value: &Value) {
        let placeholder = self.generator.next();
        self.dst.push_str(&placeholder);
        self.params.push(Param {
            placeholder,
            value: value.clone(),
        });
    }
}
