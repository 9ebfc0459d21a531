//! Page modules rendered inside the shell

pub mod dashboard;
pub mod home;

pub use dashboard::DashboardPage;
pub use home::HomePage;
