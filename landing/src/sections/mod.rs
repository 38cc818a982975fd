// Page sections, in page order
// Each content section renders an anchor whose id is its `SectionId` tag.

mod about;
mod ai_stack;
mod architecture;
mod blog;
mod contact;
mod footer;
mod header;
mod hero;
mod journey;
mod projects;
mod services;

pub use about::About;
pub use ai_stack::AiStack;
pub use architecture::Architecture;
pub use blog::Blog;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use journey::Journey;
pub use projects::Projects;
pub use services::Services;
