//! Page components.

mod dashboard;
mod forgot_password;
mod home;
mod login;
mod signup;

pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignUpPage;
