//! Page sections for the portfolio.

mod about_section;
mod contact_section;
mod footer;
mod hero_section;
mod nav_bar;
mod projects_section;
mod skills_section;

pub use about_section::AboutSection;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use nav_bar::NavBar;
pub use projects_section::ProjectsSection;
pub use skills_section::SkillsSection;
