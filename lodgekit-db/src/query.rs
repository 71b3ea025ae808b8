//! Conditional SQL assembly with positional placeholders.
//!
//! Fragments are recorded in order together with the values they bind; each
//! template carries one `{}` hole per value. `$n` numbering is assigned from
//! the running bind count when the statement is rendered, so clause order
//! alone determines placeholder order and a reordered branch can never leave
//! a stale index behind.

use std::fmt::Write;

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

/// A value bound to a rendered placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

/// One SQL fragment plus the values it binds, placeholders unassigned.
#[derive(Debug, Clone)]
struct Fragment {
    template: String,
    values: Vec<SqlParam>,
}

/// Ordered clause list for one SELECT statement.
#[derive(Debug, Clone)]
pub struct ClauseBuilder {
    fragments: Vec<Fragment>,
}

impl ClauseBuilder {
    /// Start from an unconditional base fragment.
    pub fn new(base: &str) -> Self {
        Self {
            fragments: vec![Fragment {
                template: base.to_string(),
                values: Vec::new(),
            }],
        }
    }

    /// Append a fragment with no bound values.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.push_with(sql, Vec::new())
    }

    /// Append a fragment carrying one `{}` hole per value.
    pub fn push_with(&mut self, template: &str, values: Vec<SqlParam>) -> &mut Self {
        debug_assert_eq!(
            template.matches("{}").count(),
            values.len(),
            "fragment holes must match bound values"
        );
        self.fragments.push(Fragment {
            template: template.to_string(),
            values,
        });
        self
    }

    /// Render the statement, assigning `$1..$n` in fragment order.
    ///
    /// Returns the SQL text and the values to bind, in placeholder order.
    pub fn render(&self) -> (String, Vec<SqlParam>) {
        let mut sql = String::new();
        let mut params = Vec::new();

        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                sql.push(' ');
            }
            let mut rest = fragment.template.as_str();
            let mut hole = 0;
            while let Some(pos) = rest.find("{}") {
                sql.push_str(&rest[..pos]);
                params.push(fragment.values[hole].clone());
                // placeholder number is the count of values bound so far
                let _ = write!(sql, "${}", params.len());
                hole += 1;
                rest = &rest[pos + 2..];
            }
            sql.push_str(rest);
        }

        (sql, params)
    }
}

/// Attach rendered params to a sqlx query in bind order.
pub fn bind_all<'q>(
    query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    params.iter().fold(query, |q, param| match param {
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::Float(f) => q.bind(*f),
    })
}
