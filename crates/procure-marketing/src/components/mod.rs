//! Marketing site components

mod button;
mod cards;
mod dashboard;
mod footer;
mod logo;
mod nav;
mod section;

pub use button::Button;
pub use cards::*;
pub use dashboard::DashboardMockup;
pub use footer::Footer;
pub use logo::Logo;
pub use nav::Navbar;
pub use section::Section;
