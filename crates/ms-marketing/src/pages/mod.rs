//! Marketing site pages

mod about;
mod contact;
mod health;
mod home;
mod products;
mod solutions;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use health::HealthPage;
pub use home::HomePage;
pub use products::ProductsPage;
pub use solutions::SolutionsPage;
