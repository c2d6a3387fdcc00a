//! JavaScript interview topics.

use crate::store::{CategoryModule, TopicEntry};

pub fn module() -> CategoryModule {
    CategoryModule {
        name: "JavaScript",
        topics: vec![
            ("Closures", closures()),
            ("Hoisting", hoisting()),
            ("Event Loop", event_loop()),
            ("Promises", promises()),
        ],
    }
}

fn closures() -> TopicEntry {
    TopicEntry::new(
        "\
A **closure** is a function bundled together with its lexical environment: \
the function keeps access to the variables of the scope it was created in, \
even after that scope has returned.

Common uses:

- Data privacy (emulating private fields before `#private` syntax)
- Factories and partial application
- Callbacks that need to remember setup-time values

Interview trap: closures capture *variables*, not values. A `var` loop \
counter is shared by every callback created in the loop; `let` creates a \
fresh binding per iteration.",
        "\
```js
function makeCounter() {
  let count = 0;
  return function () {
    count += 1;
    return count;
  };
}

const next = makeCounter();
next(); // 1
next(); // 2 — `count` lives on in the closure
```",
    )
}

fn hoisting() -> TopicEntry {
    TopicEntry::new(
        "\
**Hoisting** moves declarations (not initializations) to the top of their \
scope during compilation.

- `var` declarations hoist and initialize to `undefined`.
- `function` declarations hoist with their body, so they are callable \
before the line that defines them.
- `let`/`const` hoist but stay uninitialized in the *temporal dead zone*; \
touching them before the declaration throws a `ReferenceError`.",
        "\
```
console.log(a); // undefined, not a crash
var a = 1;

greet();        // works: function declarations hoist whole
function greet() {
  console.log('hi');
}

console.log(b); // ReferenceError: temporal dead zone
let b = 2;
```",
    )
}

fn event_loop() -> TopicEntry {
    TopicEntry::new(
        "\
JavaScript runs on a single thread driven by the **event loop**: the call \
stack executes synchronously, completed async work queues callbacks, and \
the loop drains queues between stack runs.

Ordering rules worth reciting:

1. Run the current script/stack to completion.
2. Drain the **microtask** queue (promise reactions, `queueMicrotask`) \
completely.
3. Take one **macrotask** (timer, I/O, UI event) and repeat.

So a resolved promise callback always beats a `setTimeout(fn, 0)`.",
        "\
```
console.log('script start');

setTimeout(() => console.log('timeout'), 0);

Promise.resolve().then(() => console.log('microtask'));

console.log('script end');
// script start, script end, microtask, timeout
```",
    )
}

fn promises() -> TopicEntry {
    TopicEntry::new(
        "\
A **Promise** represents a value that will exist later. It is in one of \
three states — *pending*, *fulfilled*, *rejected* — and settles exactly \
once.

- `.then` returns a *new* promise, which is what makes chaining work.
- Throwing inside `.then` rejects the returned promise; `.catch` resumes \
the chain.
- `async`/`await` is syntax over the same machinery; `await` unwraps a \
promise and turns rejection into a thrown exception.",
        "\
```js
function fetchUser(id) {
  return fetch(`/api/users/${id}`)
    .then((res) => {
      if (!res.ok) throw new Error(`HTTP ${res.status}`);
      return res.json();
    });
}

async function show(id) {
  try {
    const user = await fetchUser(id);
    console.log(user.name);
  } catch (err) {
    console.error('lookup failed', err);
  }
}
```",
    )
}
