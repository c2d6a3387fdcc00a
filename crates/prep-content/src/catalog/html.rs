//! HTML interview topics.

use crate::store::{CategoryModule, TopicEntry};

pub fn module() -> CategoryModule {
    CategoryModule {
        name: "HTML",
        topics: vec![
            ("Semantic Elements", semantic_elements()),
            ("Forms", forms()),
        ],
    }
}

fn semantic_elements() -> TopicEntry {
    TopicEntry::new(
        "\
**Semantic elements** name the role of their content instead of its \
look: `<header>`, `<nav>`, `<main>`, `<article>`, `<section>`, \
`<aside>`, `<footer>`.

Why interviewers ask:

- Screen readers and crawlers navigate by landmark roles.
- One `<main>` per page; `<article>` is self-contained, `<section>` \
groups related content and wants a heading.
- `<div>`/`<span>` are the fallback when no semantic element fits, not \
the default.",
        "\
```html
<body>
  <header>
    <nav aria-label=\"Primary\">…</nav>
  </header>
  <main>
    <article>
      <h1>Post title</h1>
      <section>
        <h2>Comments</h2>
      </section>
    </article>
  </main>
  <footer>© 2026</footer>
</body>
```",
    )
}

fn forms() -> TopicEntry {
    // Example-only topic: exercises the concept-view fallback path.
    TopicEntry::example_only(
        "\
```html
<form action=\"/subscribe\" method=\"post\">
  <label for=\"email\">Email</label>
  <input id=\"email\" name=\"email\" type=\"email\"
         required autocomplete=\"email\" />

  <fieldset>
    <legend>Frequency</legend>
    <label><input type=\"radio\" name=\"freq\" value=\"daily\" /> Daily</label>
    <label><input type=\"radio\" name=\"freq\" value=\"weekly\" checked /> Weekly</label>
  </fieldset>

  <button type=\"submit\">Subscribe</button>
</form>
```",
    )
}
