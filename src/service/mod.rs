pub mod articles;
pub mod members;

pub use articles::ArticleService;
pub use members::MemberService;
