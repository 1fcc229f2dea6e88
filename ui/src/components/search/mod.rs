pub mod form;
pub mod grid;
pub mod skeleton;
pub mod track;

pub use form::SearchForm;
pub use grid::TrackGrid;
pub use skeleton::SkeletonCard;
pub use track::TrackCard;

use dioxus::core::Task;
use dioxus::prelude::*;
use storefront::{FetchRequest, StoreState};

use crate::{use_source, SourceHandle};

/// Runs `request` and folds its outcome into `state`. Spawned as a task of the
/// page, so it is dropped together with the page.
async fn fetch_into(source: SourceHandle, request: FetchRequest, mut state: Signal<StoreState>) {
    let outcome = request.send(source.source()).await;
    state.write().complete(&request, outcome);
}

/// Page state plus the task of the search currently in flight.
#[derive(Clone)]
pub struct StoreHandle {
    source: SourceHandle,
    state: Signal<StoreState>,
    search_task: Signal<Option<Task>>,
}

impl StoreHandle {
    pub fn set_query(&self, text: String) {
        let mut state = self.state;
        state.write().set_query(text);
    }

    /// Starts a search for the current query. Blank queries do nothing.
    pub fn submit(&self) {
        let mut state = self.state;
        let mut search_task = self.search_task;
        let Some(request) = state.write().submit_search() else {
            return;
        };
        // Only the newest search may finish.
        if let Some(task) = search_task.take() {
            task.cancel();
        }
        let task = spawn(fetch_into(self.source.clone(), request, state));
        search_task.set(Some(task));
    }
}

/// Creates the page state and loads the top tracks, once per mount.
pub fn use_store() -> StoreHandle {
    let source = use_source();
    let mut state = use_signal(StoreState::new);
    let search_task = use_signal::<Option<Task>>(|| None);

    let initial_source = source.clone();
    use_future(move || {
        let source = initial_source.clone();
        async move {
            let request = state.write().begin_initial_load();
            fetch_into(source, request, state).await;
        }
    });

    StoreHandle {
        source,
        state,
        search_task,
    }
}

fn render_store(store: StoreHandle) -> Element {
    let (query, tracks, loading) = {
        let current = store.state.read();
        (
            current.query().to_string(),
            current.tracks().to_vec(),
            current.is_loading(),
        )
    };
    let input_store = store.clone();

    rsx! {
      SearchForm {
        query,
        on_input: move |text: String| input_store.set_query(text),
        on_submit: move |_: ()| store.submit(),
      }
      TrackGrid { tracks, loading }
    }
}

#[component]
pub fn MusicSearch() -> Element {
    render_store(use_store())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dioxus::core::{NoOpMutations, ScopeId, VirtualDom};
    use shared::Track;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use storefront::{Endpoint, Result, TrackSource};

    /// Records calls. Searching for "slow" never answers; dropping that
    /// request bumps `dropped`.
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Endpoint>>>,
        dropped: Arc<AtomicUsize>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Endpoint> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct DropCounter(Arc<AtomicUsize>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl TrackSource for Recorder {
        async fn top_tracks(&self) -> Result<Vec<Track>> {
            self.calls.lock().unwrap().push(Endpoint::Top);
            Ok(vec![Track::new(1, "One More Time", "Daft Punk")])
        }

        async fn search(&self, query: &str) -> Result<Vec<Track>> {
            self.calls.lock().unwrap().push(Endpoint::Search {
                query: query.to_string(),
            });
            if query == "slow" {
                let _guard = DropCounter(self.dropped.clone());
                std::future::pending::<()>().await;
            }
            Ok(vec![
                Track::new(2, "Nightcall", "Kavinsky"),
                Track::new(3, "Midnight City", "M83"),
            ])
        }
    }

    fn mounted(source: SourceHandle) -> Element {
        use_context_provider(move || source);
        rsx! { MusicSearch {} }
    }

    #[derive(Clone)]
    struct Harness {
        source: SourceHandle,
        store: Rc<RefCell<Option<StoreHandle>>>,
    }

    /// Same page as `MusicSearch`, with the store handed back to the test.
    fn harness(props: Harness) -> Element {
        use_context_provider(|| props.source.clone());
        let store = use_store();
        props.store.borrow_mut().get_or_insert_with(|| store.clone());
        render_store(store)
    }

    /// Polls spawned tasks and re-renders until nothing is left to do.
    async fn settle(dom: &mut VirtualDom) {
        while tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn count(dom: &VirtualDom, marker: &str) -> usize {
        dioxus_ssr::render(dom).matches(marker).count()
    }

    #[tokio::test]
    async fn test_mount_loads_top_tracks_once() {
        let recorder = Recorder::default();
        let mut dom = VirtualDom::new_with_props(mounted, SourceHandle::new(recorder.clone()));
        dom.rebuild_in_place();

        assert_eq!(count(&dom, "skeleton-card"), 12);
        assert_eq!(count(&dom, "track-card"), 0);

        settle(&mut dom).await;

        assert_eq!(recorder.calls(), vec![Endpoint::Top]);
        assert_eq!(count(&dom, "skeleton-card"), 0);
        assert_eq!(count(&dom, "track-card"), 1);
        assert!(dioxus_ssr::render(&dom).contains("One More Time"));
    }

    #[tokio::test]
    async fn test_resubmit_cancels_previous_search() {
        let recorder = Recorder::default();
        let slot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            harness,
            Harness {
                source: SourceHandle::new(recorder.clone()),
                store: slot.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        let store = slot.borrow().clone().unwrap();

        dom.in_scope(ScopeId::APP, || {
            store.set_query("slow".to_string());
            store.submit();
        });
        settle(&mut dom).await;
        assert_eq!(count(&dom, "skeleton-card"), 12);
        assert_eq!(recorder.dropped.load(Ordering::SeqCst), 0);

        dom.in_scope(ScopeId::APP, || {
            store.set_query("fast".to_string());
            store.submit();
        });
        settle(&mut dom).await;

        assert_eq!(recorder.dropped.load(Ordering::SeqCst), 1);
        assert_eq!(
            recorder.calls(),
            vec![
                Endpoint::Top,
                Endpoint::Search {
                    query: "slow".to_string()
                },
                Endpoint::Search {
                    query: "fast".to_string()
                },
            ]
        );
        assert_eq!(count(&dom, "track-card"), 2);
        assert!(!dom.in_scope(ScopeId::APP, || store.state.read().is_loading()));
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let recorder = Recorder::default();
        let slot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            harness,
            Harness {
                source: SourceHandle::new(recorder.clone()),
                store: slot.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        let store = slot.borrow().clone().unwrap();

        dom.in_scope(ScopeId::APP, || {
            store.set_query("   ".to_string());
            store.submit();
        });
        settle(&mut dom).await;

        assert_eq!(recorder.calls(), vec![Endpoint::Top]);
        assert_eq!(count(&dom, "track-card"), 1);
    }
}
