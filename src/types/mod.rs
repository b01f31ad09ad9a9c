pub mod forms;

pub use forms::{ArticleForm, MemberForm};
