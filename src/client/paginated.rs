//! Paginated stream for lazy iteration over list endpoints.
//!
//! lexoffice pages are zero-based and described by `number` and
//! `totalPages`. [`PaginatedStream`] fetches one page at a time, pauses for
//! the configured cool-down between pages, and yields individual items.
//! Listing is finished once the requested page index plus one reaches
//! `totalPages`, after an empty page, or once `max_pages` pages were
//! fetched. The `number` echoed by the server is informational only.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::{Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::config::MIN_PAGE_COOL_DOWN;
use super::executor::BoxFuture;
use super::ClientInner;
use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Largest page size lexoffice accepts.
pub const MAX_PAGE_SIZE: u32 = 250;

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in this page.
    pub content: Vec<T>,
    /// Zero-based index of this page.
    #[serde(rename = "number", alias = "page", alias = "currentPage", default)]
    pub current_page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: Option<u64>,
    /// Number of items in this page.
    #[serde(default)]
    pub number_of_elements: Option<u32>,
    /// Requested page size.
    #[serde(default)]
    pub size: Option<u32>,
    /// Whether this is the first page.
    #[serde(default)]
    pub first: Option<bool>,
    /// Whether this is the last page.
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> Page<T> {
    /// Check if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.next_page().is_some()
    }

    /// Index of the next page, if any.
    pub fn next_page(&self) -> Option<u32> {
        self.page_after(self.current_page)
    }

    /// Index of the page following `index`, if this page says there is one.
    fn page_after(&self, index: u32) -> Option<u32> {
        index
            .checked_add(1)
            .filter(|&next| !self.content.is_empty() && next < self.total_pages)
    }
}

/// Paging controls for list calls.
///
/// # Example
///
/// ```
/// use lexoffice_rs::client::ListOptions;
///
/// // First two pages of 100 items each
/// let opts = ListOptions::default().size(100).max_pages(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to start at (zero-based)
    pub page: u32,
    /// Items per page
    pub size: u32,
    /// Stop after this many pages; `None` fetches all
    pub max_pages: Option<u32>,
    /// Override the client's page cool-down
    pub cool_down: Option<Duration>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            max_pages: None,
            cool_down: None,
        }
    }
}

impl ListOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size, clamped to `1..=250`.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Fetch at most this many pages.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Pause between page requests; never below 20 ms.
    pub fn cool_down(mut self, cool_down: Duration) -> Self {
        self.cool_down = Some(cool_down.max(MIN_PAGE_COOL_DOWN));
        self
    }
}

type FetchPage<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated endpoint.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lexoffice_rs::client::ListOptions;
/// use lexoffice_rs::models::ContactType;
///
/// # async fn example(client: lexoffice_rs::LexofficeClient) -> lexoffice_rs::Result<()> {
/// let mut stream = client.contacts().list_stream(ContactType::Customer, ListOptions::default());
///
/// while let Some(result) = stream.next().await {
///     let contact = result?;
///     println!("{:?}", contact.display_name());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by index.
    fetch_page: FetchPage<T>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Next page to fetch, `None` if exhausted.
    next_page: Option<u32>,
    /// Index of the page currently being fetched.
    requested: u32,
    /// Pause before every page but the first.
    cool_down: Option<Duration>,
    /// Pages fetched so far.
    pages_fetched: u32,
    /// Page budget.
    max_pages: Option<u32>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a stream starting at `first_page`.
    pub fn new<F>(first_page: u32, max_pages: Option<u32>, fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: if max_pages == Some(0) { None } else { Some(first_page) },
            requested: first_page,
            cool_down: None,
            pages_fetched: 0,
            max_pages,
            pending_fetch: None,
        }
    }

    /// Wait `cool_down` before requesting each page after the first.
    pub fn with_cool_down(mut self, cool_down: Duration) -> Self {
        self.cool_down = Some(cool_down);
        self
    }

    /// Drain the stream into a vector, keeping page order.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T: Send + 'static> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.pages_fetched += 1;

                        let budget_left = this.max_pages.map_or(true, |max| this.pages_fetched < max);
                        this.next_page = page.page_after(this.requested).filter(|_| budget_left);
                        this.current_items = page.content.into();

                        if !this.current_items.is_empty() {
                            continue;
                        }
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page.take() {
                let mut fetch = (this.fetch_page)(page);
                if let Some(delay) = this.cool_down.filter(|_| this.pages_fetched > 0) {
                    let delayed: BoxFuture<'static, Result<Page<T>>> = Box::pin(async move {
                        tokio::time::sleep(delay).await;
                        fetch.await
                    });
                    fetch = delayed;
                }
                this.requested = page;
                this.pending_fetch = Some(fetch);
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder wiring a [`PaginatedStream`] to a list endpoint.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    options: ListOptions,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>, options: ListOptions) -> Self {
        Self {
            inner,
            path: path.into(),
            options,
            _marker: std::marker::PhantomData,
        }
    }

    /// Build the stream with additional query parameters.
    pub(crate) fn build_with_query<Q>(self, query: Q) -> PaginatedStream<T>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;
        let first_page = self.options.page;
        let size = self.options.size;
        let cool_down = self
            .options
            .cool_down
            .unwrap_or_else(|| inner.page_cool_down())
            .max(MIN_PAGE_COOL_DOWN);

        PaginatedStream::new(first_page, self.options.max_pages, move |page: u32| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            Box::pin(async move {
                #[derive(Serialize)]
                struct PageQuery<Q> {
                    #[serde(flatten)]
                    extra: Q,
                    page: u32,
                    size: u32,
                }

                tracing::debug!(path = %path, page, size, "fetching page");

                inner
                    .get_with_query::<Page<T>, _>(&path, &PageQuery { extra: query, page, size })
                    .await
            })
        })
        .with_cool_down(cool_down)
    }

    /// Build the stream without additional query parameters.
    pub(crate) fn build(self) -> PaginatedStream<T> {
        self.build_with_query(NoQuery {})
    }
}

#[derive(Debug, Clone, Serialize)]
struct NoQuery {}
