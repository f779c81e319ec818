use super::{Bind, Comma, Delimited, Formatter, Ident, Period, ToSql};

use crate::stmt::{self, Statement};

use stratum_core::stmt::Value;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table.as_str());
        let columns = Comma(self.columns.iter().map(|column| Ident(column.as_str())));
        let values = Comma(self.values.iter().map(Bind));

        fmt!(f, "INSERT INTO ", table, " (", columns, ") VALUES (", values, ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table.as_str());
        let assignments = Comma(self.assignments.iter());
        let filter = &self.filter;

        fmt!(f, "UPDATE ", table, " SET ", assignments, filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.column.as_str()), " = ", Bind(&self.value));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table.as_str());
        let filter = &self.filter;

        fmt!(f, "DELETE FROM ", table, filter);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.table.as_str();
        let columns = Comma(
            self.columns
                .iter()
                .map(|column| Period([table, column.as_str()])),
        );
        let from = Ident(table);
        let filter = &self.filter;

        fmt!(f, "SELECT ", columns, " FROM ", from, filter);
    }
}

/// Always rendered with a leading space: `` WHERE a = @p AND b = @p``.
impl ToSql for &stmt::KeyFilter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let predicates = Delimited(
            self.predicates
                .iter()
                .map(|(column, value)| KeyPredicate { column, value }),
            " AND ",
        );

        fmt!(f, " WHERE ", predicates);
    }
}

struct KeyPredicate<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for KeyPredicate<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.column), " = ", Bind(self.value));
    }
}
