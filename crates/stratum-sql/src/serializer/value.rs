use super::{Formatter, ToSql};

use stratum_core::stmt::Value;

/// A value bound through a parameter placeholder.
pub(super) struct Bind<'a>(pub(super) &'a Value);

impl ToSql for Bind<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.bind(self.0);
    }
}
