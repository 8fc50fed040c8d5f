//! Drives the controller through a fake listing API on tokio's paused clock.

use std::{cell::RefCell, future::Future, time::Duration};

use common::{
    candidate_filters::{CandidateFilterField, CandidateFilters},
    query_string::QueryPairs,
    search_result::{CandidateItem, PageResponse, PaginationMetadata},
};
use search_state::{Completion, ControllerConfig, FetchError, FetchTicket, ListingApi, MemoryUrlStore, SearchController};
use tokio::time::{Instant, sleep};

type CandidateController = SearchController<CandidateFilters, CandidateItem, MemoryUrlStore>;

/// Answers with one candidate named after the search term.
/// A term starting with "slow" takes 500ms, "fail" errors, anything else 50ms.
#[derive(Default)]
struct FakeDirectory {
    requests: RefCell<Vec<QueryPairs>>,
}

impl ListingApi<CandidateItem> for FakeDirectory {
    fn fetch_page(&self, request: &QueryPairs) -> impl Future<Output = Result<PageResponse<CandidateItem>, FetchError>> {
        self.requests.borrow_mut().push(request.clone());
        let term = request.get("search").unwrap_or("everyone").to_string();
        let delay = if term.starts_with("slow") { 500 } else { 50 };
        async move {
            sleep(Duration::from_millis(delay)).await;
            if term.starts_with("fail") {
                return Err(FetchError::Status { status: 500, message: String::new() });
            }
            Ok(PageResponse {
                data: vec![CandidateItem { id: format!("c-{term}"), full_name: term.clone(), ..Default::default() }],
                pagination: PaginationMetadata {
                    current_page: 1,
                    total_pages: 1,
                    total_items: 1,
                    has_next_page: false,
                    has_previous_page: false,
                },
            })
        }
    }
}

async fn run(controller: &RefCell<CandidateController>, api: &FakeDirectory, ticket: FetchTicket) -> Completion {
    let outcome = api.fetch_page(&ticket.request).await;
    controller.borrow_mut().complete(ticket.seq, outcome)
}

fn controller() -> RefCell<CandidateController> {
    let config = ControllerConfig { immediate: false, ..Default::default() };
    RefCell::new(CandidateController::new(config, MemoryUrlStore::new("")))
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_loses_to_fast_fresh_one() {
    let controller = controller();
    let api = FakeDirectory::default();

    let slow = controller.borrow_mut().update_filters(|s| s.query = "slow-rust".to_string()).unwrap().unwrap();
    let fast = controller.borrow_mut().update_filters(|s| s.query = "go".to_string()).unwrap().unwrap();

    let (slow_outcome, fast_outcome) = futures::join!(run(&controller, &api, slow), run(&controller, &api, fast));

    assert_eq!(fast_outcome, Completion::Applied);
    assert_eq!(slow_outcome, Completion::Stale);
    let controller = controller.borrow();
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].id, "c-go");
    assert_eq!(api.requests.borrow().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn reset_right_after_search_wins() {
    let controller = controller();
    let api = FakeDirectory::default();

    let search = controller.borrow_mut().update_filters(|s| s.query = "fast".to_string()).unwrap().unwrap();
    let reset = controller.borrow_mut().reset_filters();

    let (search_outcome, reset_outcome) = futures::join!(run(&controller, &api, search), run(&controller, &api, reset));

    assert_eq!(search_outcome, Completion::Stale);
    assert_eq!(reset_outcome, Completion::Applied);
    assert_eq!(controller.borrow().items()[0].id, "c-everyone");
    assert!(!controller.borrow().has_active_filters());
}

#[tokio::test(start_paused = true)]
async fn typing_bursts_dispatch_a_single_request() {
    let controller = controller();
    let api = FakeDirectory::default();
    let epoch = Instant::now();

    let typing = async {
        for text in ["a", "ab", "abc"] {
            controller.borrow_mut().search(text, None, epoch.elapsed());
            sleep(Duration::from_millis(100)).await;
        }
    };
    let timer = async {
        let mut dispatched = Vec::new();
        for _ in 0..20 {
            sleep(Duration::from_millis(50)).await;
            let ticket = controller.borrow_mut().poll_search(epoch.elapsed()).expect("valid");
            if let Some(ticket) = ticket {
                dispatched.push(ticket);
            }
        }
        dispatched
    };
    let ((), dispatched) = futures::join!(typing, timer);

    assert_eq!(dispatched.len(), 1);
    let ticket = dispatched.into_iter().next().expect("one ticket");
    assert_eq!(ticket.request.get("search"), Some("abc"));
    assert_eq!(run(&controller, &api, ticket).await, Completion::Applied);
    assert_eq!(api.requests.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failure_surfaces_message_then_retry_recovers() {
    let controller = controller();
    let api = FakeDirectory::default();

    let ok = controller.borrow_mut().toggle_filter(CandidateFilterField::Skill, "rust").unwrap().unwrap();
    run(&controller, &api, ok).await;

    let failing = controller.borrow_mut().update_filters(|s| s.query = "fail".to_string()).unwrap().unwrap();
    assert_eq!(run(&controller, &api, failing).await, Completion::Failed);
    {
        let controller = controller.borrow();
        assert!(controller.error().expect("message").contains("500"));
        assert_eq!(controller.items()[0].id, "c-everyone");
    }

    controller.borrow_mut().update_filters(|s| s.query = "ada".to_string()).unwrap();
    let retry = controller.borrow_mut().refresh();
    assert_eq!(run(&controller, &api, retry).await, Completion::Applied);
    assert_eq!(controller.borrow().error(), None);
    assert_eq!(controller.borrow().items()[0].id, "c-ada");
}
