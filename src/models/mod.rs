mod answers;
mod page;
mod question;

pub use answers::AnswerSet;
pub use page::Page;
pub use question::{QuestionBank, QuestionRecord};
