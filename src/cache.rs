use std::any::TypeId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::{Condvar, Mutex};

use crate::compile::{compile, Routine};
use crate::error::Result;
use crate::options::Options;
use crate::shape::{JsonType, ShapeGraph};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    type_id: TypeId,
    options: Options,
}

enum State {
    /// One thread owns the build; everyone else parks on the condvar.
    Building,
    Ready(Routine),
    /// The memoized build failure, replayed to every later caller. Shapes
    /// and options are static for the process lifetime, so a failed build
    /// can never succeed on retry.
    Failed(crate::error::Error),
}

struct Slot {
    state: Mutex<State>,
    done: Condvar,
}

impl Slot {
    fn building() -> Self {
        Slot {
            state: Mutex::new(State::Building),
            done: Condvar::new(),
        }
    }

    fn ready(routine: Routine) -> Self {
        Slot {
            state: Mutex::new(State::Ready(routine)),
            done: Condvar::new(),
        }
    }

    fn resolve(&self) -> Result<Routine> {
        let mut state = self.state.lock();
        loop {
            match &*state {
                State::Building => {}
                State::Ready(routine) => return Ok(routine.clone()),
                State::Failed(err) => return Err(err.clone()),
            }
            self.done.wait(&mut state);
        }
    }

    fn fill(&self, outcome: &Result<Routine>) {
        let mut state = self.state.lock();
        *state = match outcome {
            Ok(routine) => State::Ready(routine.clone()),
            Err(err) => State::Failed(err.clone()),
        };
        self.done.notify_all();
    }
}

static REGISTRY: LazyLock<Mutex<HashMap<Key, Arc<Slot>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the routine for `(T, options)`, building it at most once per
/// process. Concurrent callers for the same key wait for the winning
/// builder; both success and failure are terminal.
pub(crate) fn get_or_build<T: JsonType>(options: Options) -> Result<Routine> {
    let key = Key {
        type_id: TypeId::of::<T>(),
        options,
    };

    let (slot, won) = {
        let mut registry = REGISTRY.lock();
        match registry.entry(key) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => (entry.insert(Arc::new(Slot::building())).clone(), true),
        }
    };

    if !won {
        return slot.resolve();
    }

    // The registry lock is released while building: nested types publish
    // their own entries from inside the build, and unrelated keys must not
    // contend with a slow build.
    let outcome = build::<T>(options);
    slot.fill(&outcome);
    outcome
}

fn build<T: JsonType>(options: Options) -> Result<Routine> {
    let mut graph = ShapeGraph::new(options.include_inherited);
    let root = T::describe(&mut graph);
    compile(&graph, root, options)
}

/// Records a routine compiled as part of another key's build. Only vacant
/// entries are filled; a key someone else is building (or has built) is
/// left alone.
pub(crate) fn publish_nested(type_id: TypeId, options: Options, routine: Routine) {
    let mut registry = REGISTRY.lock();
    registry
        .entry(Key { type_id, options })
        .or_insert_with(|| Arc::new(Slot::ready(routine)));
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::Error;
    use crate::shape::ShapeId;
    use crate::view::{JsonView, View};

    use super::*;

    static COUNTING_DESCRIBES: AtomicUsize = AtomicUsize::new(0);

    struct Counting;

    impl JsonType for Counting {
        fn describe(graph: &mut ShapeGraph) -> ShapeId {
            COUNTING_DESCRIBES.fetch_add(1, Ordering::SeqCst);
            graph.string()
        }
    }

    impl JsonView for Counting {
        fn view(&self) -> View<'_> {
            View::Str("counting")
        }
    }

    struct Doomed;

    impl JsonType for Doomed {
        fn describe(graph: &mut ShapeGraph) -> ShapeId {
            graph.unsupported("doomed by construction")
        }
    }

    struct PerOptions;

    impl JsonType for PerOptions {
        fn describe(graph: &mut ShapeGraph) -> ShapeId {
            graph.string()
        }
    }

    #[rstest::rstest]
    fn test_build_happens_once_per_key() {
        let first = get_or_build::<Counting>(Options::default()).unwrap();
        let count = COUNTING_DESCRIBES.load(Ordering::SeqCst);
        let second = get_or_build::<Counting>(Options::default()).unwrap();

        assert_eq!(COUNTING_DESCRIBES.load(Ordering::SeqCst), count);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[rstest::rstest]
    fn test_failure_is_memoized() {
        let first = get_or_build::<Doomed>(Options::default()).err().unwrap();
        let second = get_or_build::<Doomed>(Options::default()).err().unwrap();

        assert!(matches!(&first, Error::UnsupportedShape(reason) if reason == "doomed by construction"));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[rstest::rstest]
    fn test_distinct_options_are_distinct_keys() {
        let compact = get_or_build::<PerOptions>(Options::default()).unwrap();
        let pretty = get_or_build::<PerOptions>(Options::PRETTY_PRINT).unwrap();
        assert!(!Arc::ptr_eq(&compact, &pretty));
    }
}
