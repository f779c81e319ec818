mod delete;
pub use delete::Delete;

mod filter;
pub use filter::KeyFilter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::{Assignment, Update};

/// A single-entity CRUD statement ready for serialization.
#[derive(Debug, Clone)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
