//! Parameterized WHERE / LIMIT / OFFSET fragments.
//!
//! Values never enter the clause text. Each value takes the next `$n`
//! placeholder and is kept, in order, in the fragment's argument list so the
//! repository can bind them one by one.

use crate::domain::Filter;

/// A value bound to one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    Text(String),
    Int(i64),
}

/// Clause text plus the arguments for its placeholders, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFragment {
    sql: String,
    args: Vec<SqlArg>,
}

impl QueryFragment {
    /// Either empty or starting with a single space, ready to append to a
    /// `SELECT ... FROM table` statement.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ClauseBuilder {
    predicates: Vec<String>,
    limit: Option<String>,
    offset: Option<String>,
    args: Vec<SqlArg>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn placeholder(&mut self, arg: SqlArg) -> String {
        self.args.push(arg);
        format!("${}", self.args.len())
    }

    /// Adds `column = $n`. Predicates are ANDed in insertion order.
    pub fn add_where(&mut self, column: &'static str, arg: SqlArg) -> &mut Self {
        let placeholder = self.placeholder(arg);
        self.predicates.push(format!("{column} = {placeholder}"));
        self
    }

    /// # Panics
    ///
    /// Panics if a limit was already added. [`from_filter`] adds it at most once.
    pub fn add_limit(&mut self, limit: i64) -> &mut Self {
        assert!(self.limit.is_none(), "only one LIMIT per clause");
        let placeholder = self.placeholder(SqlArg::Int(limit));
        self.limit = Some(format!("LIMIT {placeholder}"));
        self
    }

    /// # Panics
    ///
    /// Panics if an offset was already added. [`from_filter`] adds it at most once.
    pub fn add_offset(&mut self, offset: i64) -> &mut Self {
        assert!(self.offset.is_none(), "only one OFFSET per clause");
        let placeholder = self.placeholder(SqlArg::Int(offset));
        self.offset = Some(format!("OFFSET {placeholder}"));
        self
    }

    pub fn build(self) -> QueryFragment {
        let mut segments = Vec::with_capacity(3);
        if !self.predicates.is_empty() {
            segments.push(format!("WHERE {}", self.predicates.join(" AND ")));
        }
        segments.extend(self.limit);
        segments.extend(self.offset);

        let sql = if segments.is_empty() {
            String::new()
        } else {
            format!(" {}", segments.join(" "))
        };
        QueryFragment {
            sql,
            args: self.args,
        }
    }
}

/// Renders `filter` with columns in fixed order: name, surname, age, gender,
/// nationality, then LIMIT and OFFSET.
pub fn from_filter(filter: &Filter) -> QueryFragment {
    let mut builder = ClauseBuilder::new();
    if let Some(name) = &filter.name {
        builder.add_where("name", SqlArg::Text(name.clone()));
    }
    if let Some(surname) = &filter.surname {
        builder.add_where("surname", SqlArg::Text(surname.clone()));
    }
    if let Some(age) = filter.age {
        builder.add_where("age", SqlArg::Int(age));
    }
    if let Some(gender) = &filter.gender {
        builder.add_where("gender", SqlArg::Text(gender.clone()));
    }
    if let Some(nationality) = &filter.nationality {
        builder.add_where("nationality", SqlArg::Text(nationality.clone()));
    }
    if let Some(limit) = filter.limit() {
        builder.add_limit(limit);
    }
    if let Some(offset) = filter.offset() {
        builder.add_offset(offset);
    }
    builder.build()
}
