mod attempt;
mod content;
mod dashboard;
mod exam_type;
mod generation;
mod history;
mod login;
mod onboarding;
mod profile;
mod result;
mod signup;

pub use attempt::AttemptPage;
pub use content::ContentPage;
pub use dashboard::DashboardPage;
pub use exam_type::ExamTypePage;
pub use generation::GenerationPage;
pub use history::HistoryPage;
pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use profile::ProfilePage;
pub use result::ResultPage;
pub use signup::SignupPage;
