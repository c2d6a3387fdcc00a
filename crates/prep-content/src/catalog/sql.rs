//! SQL interview topics.

use crate::store::{CategoryModule, TopicEntry};

pub fn module() -> CategoryModule {
    CategoryModule {
        name: "SQL",
        topics: vec![("Joins", joins()), ("Indexes", indexes())],
    }
}

fn joins() -> TopicEntry {
    TopicEntry::new(
        "\
A **join** combines rows from two tables by a predicate.

- `INNER JOIN` — only rows with a match on both sides.
- `LEFT JOIN` — every left row; unmatched right columns become `NULL`.
- `FULL OUTER JOIN` — union of both, `NULL`-padded.
- `CROSS JOIN` — cartesian product; almost always a bug unless explicit.

The classic follow-up: filtering the right table in `WHERE` after a \
`LEFT JOIN` silently turns it into an inner join — put the condition in \
the `ON` clause instead.",
        "\
```
SELECT u.name, COUNT(o.id) AS orders
FROM users u
LEFT JOIN orders o
  ON o.user_id = u.id AND o.status = 'paid'
GROUP BY u.name
ORDER BY orders DESC;
```",
    )
}

fn indexes() -> TopicEntry {
    TopicEntry::new(
        "\
An **index** is a sorted auxiliary structure (almost always a B-tree) \
that turns scans into seeks.

- Composite index `(a, b)` serves predicates on `a` or on `a AND b`, \
not on `b` alone (leftmost-prefix rule).
- Wrapping the column in a function (`lower(email)`) defeats the index \
unless the index is built on that expression.
- Every index taxes writes; index for the queries you actually run.

`EXPLAIN` answers the \"will it use the index?\" question — guessing \
does not.",
        "\
```
CREATE TABLE orders (
  id      BIGINT PRIMARY KEY,
  user_id BIGINT NOT NULL,
  status  TEXT   NOT NULL,
  created TIMESTAMPTZ NOT NULL
);

CREATE INDEX orders_user_created
  ON orders (user_id, created DESC);

-- Served by the index above:
SELECT * FROM orders
WHERE user_id = 42
ORDER BY created DESC
LIMIT 20;
```",
    )
}
