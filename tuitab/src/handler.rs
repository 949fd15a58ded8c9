//! Callback types and handler composition.
//!
//! Tabs live on the single UI dispatch thread, so callbacks are
//! reference-counted closures without `Send`/`Sync` bounds.

use std::rc::Rc;

use crate::event::KeyEvent;

/// A callback receiving a borrowed event.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// A key callback. It may call [`KeyEvent::prevent_default`].
pub type KeyHandler = Rc<dyn Fn(&mut KeyEvent)>;

/// Semantic activation callback, no payload.
pub type SelectHandler = Rc<dyn Fn()>;

/// Compose an optional caller handler with an internal one.
///
/// The returned closure runs the caller's handler first, then the internal
/// one. Both always run; neither can stop the other.
pub fn fork<'a, E>(
    caller: Option<Handler<E>>,
    mut internal: impl FnMut(&E) + 'a,
) -> impl FnMut(&E) + 'a
where
    E: 'a,
{
    move |event: &E| {
        if let Some(handler) = &caller {
            handler(event);
        }
        internal(event);
    }
}

/// Invoke `handler` if present.
pub fn emit<E>(handler: Option<&Handler<E>>, event: &E) {
    if let Some(handler) = handler {
        handler(event);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_fork_runs_caller_then_internal() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let caller_calls = calls.clone();
        let caller: Handler<u8> = Rc::new(move |e| caller_calls.borrow_mut().push(("caller", *e)));

        let internal_calls = calls.clone();
        let mut forked = fork(Some(caller), move |e: &u8| {
            internal_calls.borrow_mut().push(("internal", *e))
        });
        forked(&7);

        assert_eq!(*calls.borrow(), vec![("caller", 7), ("internal", 7)]);
    }

    #[test]
    fn test_fork_without_caller() {
        let mut hits = 0;
        {
            let mut forked = fork(None, |_: &()| hits += 1);
            forked(&());
            forked(&());
        }
        assert_eq!(hits, 2);
    }
}
