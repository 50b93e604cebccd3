pub mod commit_detail;
pub mod event_feed;

pub use commit_detail::CommitDetailService;
pub use event_feed::EventFeedService;
