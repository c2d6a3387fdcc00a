//! CSS interview topics.

use crate::store::{CategoryModule, TopicEntry};

pub fn module() -> CategoryModule {
    CategoryModule {
        name: "CSS",
        topics: vec![
            ("Flexbox", flexbox()),
            ("Grid", grid()),
            ("Specificity", specificity()),
        ],
    }
}

fn flexbox() -> TopicEntry {
    TopicEntry::new(
        "\
**Flexbox** lays out children along a single axis and distributes free \
space between them.

Key properties on the container: `flex-direction`, `justify-content` \
(main axis), `align-items` (cross axis), `flex-wrap`. On the items: \
`flex-grow`, `flex-shrink`, `flex-basis` — usually written as the \
`flex` shorthand.

`flex: 1` means `1 1 0`: grow equally from a zero basis, which is how \
equal-width columns are made.",
        "\
```css
.toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 8px;
}

.toolbar .spacer {
  flex: 1; /* soak up the free space */
}
```",
    )
}

fn grid() -> TopicEntry {
    TopicEntry::new(
        "\
**Grid** is two-dimensional: rows and columns are defined on the \
container and items are placed into cells or named areas.

- `grid-template-columns: repeat(3, 1fr)` — three equal columns.
- `fr` shares leftover space; `minmax(200px, 1fr)` bounds it.
- `auto-fill`/`auto-fit` with `minmax` gives responsive card layouts \
without media queries.

Flexbox distributes content along one axis; Grid carves space in two. \
They compose — grid for the page, flex inside a cell.",
        "\
```css
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 16px;
}
```",
    )
}

fn specificity() -> TopicEntry {
    // No example: the concept table is the whole story.
    TopicEntry::concept_only(
        "\
**Specificity** decides which rule wins when several match the same \
element. Score selectors as `(inline, ids, classes, elements)` compared \
left to right:

- inline `style=\"…\"` — `(1,0,0,0)`
- `#nav` — `(0,1,0,0)`
- `.item`, `[type=text]`, `:hover` — `(0,0,1,0)`
- `li`, `::before` — `(0,0,0,1)`

Ties fall back to source order. `!important` sits outside the scale and \
beats everything, which is why it is a maintenance hazard rather than a \
tool. The universal selector `*` and combinators add nothing.",
    )
}
