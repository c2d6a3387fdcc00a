//! Python interview topics.

use crate::store::{CategoryModule, TopicEntry};

pub fn module() -> CategoryModule {
    CategoryModule {
        name: "Python",
        topics: vec![
            ("Decorators", decorators()),
            ("Generators", generators()),
        ],
    }
}

fn decorators() -> TopicEntry {
    TopicEntry::new(
        "\
A **decorator** is a callable that takes a function and returns a \
replacement — `@deco` is sugar for `f = deco(f)` at definition time.

Points interviewers probe:

- Decorators run once, when the module is imported, not per call.
- `functools.wraps` preserves the wrapped function's name and docstring.
- A decorator *with arguments* is a function returning a decorator \
(three nested levels).",
        "\
```
import functools
import time

def timed(fn):
    @functools.wraps(fn)
    def wrapper(*args, **kwargs):
        start = time.perf_counter()
        try:
            return fn(*args, **kwargs)
        finally:
            print(f\"{fn.__name__}: {time.perf_counter() - start:.3f}s\")
    return wrapper

@timed
def slow_sum(n):
    return sum(range(n))
```",
    )
}

fn generators() -> TopicEntry {
    TopicEntry::new(
        "\
A **generator** is a function with `yield`: calling it builds a lazy \
iterator instead of running the body. State is suspended between \
`next()` calls.

- Memory: streams one item at a time, so pipelines over large inputs \
stay flat.
- A generator can be consumed exactly once.
- Generator *expressions* `(x * x for x in xs)` are the inline form; \
brackets instead of parens would materialize a list.",
        "\
```
def read_ints(path):
    with open(path) as handle:
        for line in handle:
            line = line.strip()
            if line:
                yield int(line)

total = sum(read_ints(\"numbers.txt\"))
```",
    )
}
