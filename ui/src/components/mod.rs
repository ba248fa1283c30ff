pub mod attempt;
pub mod charts;
pub mod content;
pub mod dashboard;
pub mod exam_type;
pub mod footer;
pub mod generation;
pub mod history;
pub mod login;
pub mod modal;
pub mod onboarding;
pub mod profile;
pub mod result;
pub mod signup;
pub mod simple;

pub use attempt::ExamAttempt;
pub use charts::*;
pub use content::ContentSelection;
pub use dashboard::Dashboard;
pub use exam_type::ExamTypeSelection;
pub use footer::Footer;
pub use generation::ExamGeneration;
pub use history::ExamHistory;
pub use login::{Login, LoginOutcome};
pub use modal::*;
pub use onboarding::Onboarding;
pub use profile::Profile;
pub use result::ResultView;
pub use signup::Signup;
pub use simple::*;
