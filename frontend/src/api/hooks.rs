use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::content::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Missing,
    Failed,
}

impl<T> From<Result<T, ApiError>> for Load<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Load::Ready(value),
            Err(ApiError::NotFound) => Load::Missing,
            Err(_) => Load::Failed,
        }
    }
}

/// Runs `fetch` whenever `deps` change. A response that arrives after the deps
/// moved on (or after unmount) is dropped.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<Load<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Load::Loading);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |deps: &D| {
                let live = Rc::new(Cell::new(true));
                state.set(Load::Loading);
                let request = fetch(deps.clone());
                {
                    let live = live.clone();
                    spawn_local(async move {
                        let result = request.await;
                        if live.get() {
                            state.set(result.into());
                        }
                    });
                }
                move || live.set(false)
            },
            deps,
        );
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_failure() {
        assert_eq!(Load::<u8>::from(Err(ApiError::NotFound)), Load::Missing);
        assert_eq!(Load::<u8>::from(Err(ApiError::Status(500))), Load::Failed);
        assert_eq!(Load::<u8>::from(Err(ApiError::Network("down".into()))), Load::Failed);
        assert_eq!(Load::from(Ok(3u8)), Load::Ready(3));
    }
}
