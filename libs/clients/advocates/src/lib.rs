//! Client for the advocates API plus toolkit-independent view state for a
//! search grid: debounced input, infinite scroll and local filters.
//!
//! ```rust,no_run
//! use advocates_client::{AdvocateGridView, AdvocatesClient};
//!
//! # async fn run() -> Result<(), advocates_client::ClientError> {
//! let client = AdvocatesClient::new("http://localhost:8080")?;
//! let mut view = AdvocateGridView::new(5);
//!
//! let request = view.start();
//! view.fetch(&client, request).await;
//!
//! while let Some(request) = view.load_more() {
//!     view.fetch(&client, request).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod debounce;
pub mod error;
pub mod feed;
pub mod filter;
pub mod highlight;
pub mod model;
pub mod view;

pub use client::{AdvocateSource, AdvocatesClient};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{ClientError, ClientResult};
pub use feed::{AdvocateFeed, Completion, PageRequest};
pub use filter::{FilterOptions, Filters, YearsBucket};
pub use model::Advocate;
pub use view::{AdvocateGridView, CardView, EMPTY_MESSAGE};
